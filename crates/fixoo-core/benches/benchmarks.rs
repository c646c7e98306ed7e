use criterion::{criterion_group, criterion_main, Criterion};
use fixoo_core::prelude::*;

fn bench_search(c: &mut Criterion) {
    let dir = Directory::load().expect("bundled catalog");
    let favs = FavoriteSet::new();
    let user = Coordinate::new(31.6295, -7.9811);

    c.bench_function("search/unfiltered_no_location", |b| {
        let criteria = FilterCriteria::default();
        b.iter(|| dir.search(&criteria, None, &favs))
    });

    c.bench_function("search/ranked_by_distance", |b| {
        let criteria = FilterCriteria::new().with_max_distance_km(400.0);
        b.iter(|| dir.search(&criteria, Some(user), &favs))
    });

    c.bench_function("search/query_and_services", |b| {
        let criteria = FilterCriteria::new()
            .with_query("re")
            .with_service("Réparation téléphone");
        b.iter(|| dir.search(&criteria, Some(user), &favs))
    });
}

fn bench_haversine(c: &mut Criterion) {
    let a = Coordinate::new(31.6295, -7.9811);
    let b_pt = Coordinate::new(35.7595, -5.8340);

    c.bench_function("geo/haversine_km", |b| {
        b.iter(|| haversine_km(a, b_pt))
    });
}

criterion_group!(benches, bench_search, bench_haversine);
criterion_main!(benches);
