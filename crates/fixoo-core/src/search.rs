// crates/fixoo-core/src/search.rs

use crate::favorites::FavoriteSet;
use crate::filter::FilterCriteria;
use crate::geo::Coordinate;
use crate::model::{Directory, Store};
use crate::traits::{NameMatch, StoreBackend};

/// A store augmented with its computed distance, produced per query.
///
/// Ephemeral: created fresh on every recomputation and never cached.
/// `distance_km` is `Some` only when a user coordinate was available,
/// so consumers never have to guess which fields are valid.
#[derive(Debug, Clone, Copy)]
pub struct RankedStore<'a, B: StoreBackend> {
    pub store: &'a Store<B>,
    pub distance_km: Option<f64>,
}

impl<'a, B: StoreBackend> RankedStore<'a, B> {
    /// Distance for display purposes: `0.0` when no coordinate existed,
    /// matching the original UI contract.
    pub fn distance_km_or_zero(&self) -> f64 {
        self.distance_km.unwrap_or(0.0)
    }
}

impl<B: StoreBackend> Directory<B> {
    /// Filter, rank and assemble the result view.
    ///
    /// Applies the non-distance dimensions of `criteria` first, then:
    /// - with a user coordinate: computes the haversine distance for every
    ///   survivor, drops entries beyond `criteria.max_distance_km`, and
    ///   stable-sorts ascending by distance (equal distances keep catalog
    ///   order between runs);
    /// - without one: skips distance computation and the bound entirely,
    ///   preserving catalog order with `distance_km = None`.
    ///
    /// The whole list is materialized since catalogs are small and the result
    /// must be restartable. Idempotent for identical inputs.
    pub fn search<'a>(
        &'a self,
        criteria: &FilterCriteria,
        user: Option<Coordinate>,
        favorites: &FavoriteSet,
    ) -> Vec<RankedStore<'a, B>> {
        let filtered = self
            .stores
            .iter()
            .filter(|s| criteria.accepts(s, favorites));

        match user {
            Some(pos) => {
                let mut ranked: Vec<(f64, &Store<B>)> = filtered
                    .map(|s| (pos.distance_km(&s.coordinate()), s))
                    .filter(|(d, _)| *d <= criteria.max_distance_km)
                    .collect();
                // sort_by is stable, so ties keep their catalog order.
                ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
                ranked
                    .into_iter()
                    .map(|(d, store)| RankedStore {
                        store,
                        distance_km: Some(d),
                    })
                    .collect()
            }
            None => filtered
                .map(|store| RankedStore {
                    store,
                    distance_km: None,
                })
                .collect(),
        }
    }

    /// Find all stores whose name, city or address *loosely matches* the
    /// given substring (case-insensitive, accent-insensitive).
    ///
    /// This is the text dimension of [`Directory::search`] exposed directly
    /// for lookup-style consumers (CLI, wasm). An empty query returns
    /// nothing here, unlike the full pipeline where it means "no filter".
    pub fn find_stores_by_substring(&self, substr: &str) -> Vec<&Store<B>> {
        if substr.trim().is_empty() {
            return Vec::new();
        }
        self.stores
            .iter()
            .filter(|s| {
                s.name_contains(substr)
                    || crate::text::contains_folded(s.city(), substr)
                    || crate::text::contains_folded(s.address(), substr)
            })
            .collect()
    }

    /// All stores in a city (folded equality), catalog order.
    pub fn find_stores_in_city(&self, city: &str) -> Vec<&Store<B>> {
        self.stores
            .iter()
            .filter(|s| crate::text::equals_folded(s.city(), city))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_directory, StoreRaw, StoresRaw, WeekScheduleRaw};
    use crate::traits::DefaultBackend;

    fn hours() -> WeekScheduleRaw {
        WeekScheduleRaw {
            monday: "9:00 - 18:00".into(),
            tuesday: "9:00 - 18:00".into(),
            wednesday: "9:00 - 18:00".into(),
            thursday: "9:00 - 18:00".into(),
            friday: "9:00 - 18:00".into(),
            saturday: "10:00 - 16:00".into(),
            sunday: "Fermé".into(),
        }
    }

    fn raw(id: &str, name: &str, city: &str, lat: f64, lng: f64, rating: f64) -> StoreRaw {
        StoreRaw {
            id: id.into(),
            name: name.into(),
            address: format!("{name} street"),
            city: city.into(),
            phone: "+212 5 00 00 00 00".into(),
            email: "x@example.ma".into(),
            latitude: lat,
            longitude: lng,
            rating,
            services: vec!["Réparation téléphone".into()],
            working_hours: hours(),
        }
    }

    /// Marrakech / Casablanca / Rabat, the concrete scenario catalog.
    fn tri_city() -> Directory<DefaultBackend> {
        let raw: StoresRaw = vec![
            raw("1", "TechFix Marrakech", "Marrakech", 31.6295, -7.9811, 4.8),
            raw("2", "QuickRepair Casablanca", "Casablanca", 33.5731, -7.5898, 4.5),
            raw("3", "Digital Solutions Rabat", "Rabat", 34.0209, -6.8416, 4.7),
        ];
        build_directory(raw)
    }

    const AT_MARRAKECH: Coordinate = Coordinate {
        lat: 31.6295,
        lng: -7.9811,
    };

    #[test]
    fn no_coordinate_keeps_catalog_order_with_no_distance() {
        let dir = tri_city();
        let favs = FavoriteSet::new();
        let out = dir.search(&FilterCriteria::default(), None, &favs);

        let ids: Vec<&str> = out.iter().map(|r| r.store.id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(out.iter().all(|r| r.distance_km.is_none()));
        assert!(out.iter().all(|r| r.distance_km_or_zero() == 0.0));
    }

    #[test]
    fn coordinate_sorts_ascending_and_applies_bound() {
        let dir = tri_city();
        let favs = FavoriteSet::new();

        // User at Marrakech, 100 km bound: Casablanca (~219 km) and Rabat
        // (~286 km) are excluded, only Marrakech itself survives.
        let c = FilterCriteria::new().with_max_distance_km(100.0);
        let out = dir.search(&c, Some(AT_MARRAKECH), &favs);
        let ids: Vec<&str> = out.iter().map(|r| r.store.id()).collect();
        assert_eq!(ids, vec!["1"]);
        assert_eq!(out[0].distance_km, Some(0.0));

        // Unbounded: all three, nearest first, distances non-decreasing.
        let out = dir.search(&FilterCriteria::default(), Some(AT_MARRAKECH), &favs);
        let ids: Vec<&str> = out.iter().map(|r| r.store.id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        for pair in out.windows(2) {
            assert!(pair[0].distance_km_or_zero() <= pair[1].distance_km_or_zero());
        }
        for r in &out {
            assert!(r.distance_km_or_zero() <= f64::INFINITY);
        }
    }

    #[test]
    fn query_ignores_distance_settings_without_coordinate() {
        let dir = tri_city();
        let favs = FavoriteSet::new();
        let c = FilterCriteria::new()
            .with_query("casa")
            .with_max_distance_km(1.0);
        let out = dir.search(&c, None, &favs);
        let ids: Vec<&str> = out.iter().map(|r| r.store.id()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn min_rating_excludes_below_floor() {
        let dir = tri_city();
        let favs = FavoriteSet::new();
        let c = FilterCriteria::new().with_min_rating(4.6);
        let out = dir.search(&c, None, &favs);
        let ids: Vec<&str> = out.iter().map(|r| r.store.id()).collect();
        // Ratings are 4.8, 4.5, 4.7; the 4.5 store drops out.
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let dir = tri_city();
        let mut favs = FavoriteSet::new();
        favs.insert("3");
        let c = FilterCriteria::new().with_min_rating(4.0);

        let a = dir.search(&c, Some(AT_MARRAKECH), &favs);
        let b = dir.search(&c, Some(AT_MARRAKECH), &favs);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.store.id(), y.store.id());
            assert_eq!(x.distance_km, y.distance_km);
        }
    }

    #[test]
    fn equal_distances_keep_catalog_order() {
        // Two stores at the same point tie on distance.
        let raw: StoresRaw = vec![
            raw("a", "First", "X", 31.0, -7.0, 4.0),
            raw("b", "Second", "X", 31.0, -7.0, 4.0),
            raw("c", "Third", "Y", 32.0, -7.0, 4.0),
        ];
        let dir: Directory<DefaultBackend> = build_directory(raw);
        let favs = FavoriteSet::new();
        let user = Coordinate::new(30.0, -7.0);

        let out = dir.search(&FilterCriteria::default(), Some(user), &favs);
        let ids: Vec<&str> = out.iter().map(|r| r.store.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn service_filter_yields_no_false_positives() {
        let mut stores: StoresRaw = vec![
            raw("1", "A", "X", 31.0, -7.0, 4.0),
            raw("2", "B", "Y", 32.0, -7.0, 4.0),
        ];
        stores[1].services = vec!["Récupération données".into()];
        let dir: Directory<DefaultBackend> = build_directory(stores);
        let favs = FavoriteSet::new();

        let c = FilterCriteria::new().with_service("recuperation donnees");
        let out = dir.search(&c, None, &favs);
        assert!(out
            .iter()
            .all(|r| r.store.offers_service("Récupération données")));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn empty_catalog_yields_empty_results() {
        let dir: Directory<DefaultBackend> = build_directory(Vec::new());
        let favs = FavoriteSet::new();
        let out = dir.search(&FilterCriteria::default(), Some(AT_MARRAKECH), &favs);
        assert!(out.is_empty());
    }

    #[test]
    fn substring_finder_covers_name_city_address() {
        let dir = tri_city();
        assert_eq!(dir.find_stores_by_substring("quickrepair").len(), 1);
        assert_eq!(dir.find_stores_by_substring("rabat").len(), 1);
        assert!(dir.find_stores_by_substring("").is_empty());
        assert!(dir.find_stores_by_substring("berlin").is_empty());
    }

    #[test]
    fn city_finder_is_exact() {
        let dir = tri_city();
        assert_eq!(dir.find_stores_in_city("casablanca").len(), 1);
        assert!(dir.find_stores_in_city("casa").is_empty());
    }
}
