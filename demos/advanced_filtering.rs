//! Advanced filtering example for fixoo-rs
//!
//! This example demonstrates advanced filtering and ranking capabilities

use fixoo_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Fixoo-RS Advanced Filtering Example ===\n");

    let dir = Directory::<StandardBackend>::load()?;
    let favorites = FavoriteSet::new();

    // Example 1: Combine a text query with a rating floor
    println!("--- Example 1: 'tech' stores rated 4.5 or better ---");
    let criteria = FilterCriteria::new().with_query("tech").with_min_rating(4.5);
    for result in dir.search(&criteria, None, &favorites) {
        println!(
            "- {} ({}, {:.1}/5)",
            result.store.name(),
            result.store.city(),
            result.store.rating()
        );
    }
    println!();

    // Example 2: Service tags are OR-combined
    println!("--- Example 2: Screen replacement OR computer repair ---");
    let criteria = FilterCriteria::new()
        .with_service("Remplacement écran")
        .with_service("Réparation ordinateur");
    for result in dir.search(&criteria, None, &favorites) {
        println!(
            "- {} ({})",
            result.store.name(),
            result.store.services().join(", ")
        );
    }
    println!();

    // Example 3: Accent-insensitive matching
    println!("--- Example 3: Query 'fes' matches 'Fès' ---");
    let criteria = FilterCriteria::new().with_query("fes");
    for result in dir.search(&criteria, None, &favorites) {
        println!("- {} ({})", result.store.name(), result.store.city());
    }
    println!();

    // Example 4: Distance-bounded search from Casablanca
    println!("--- Example 4: Stores within 150 km of Casablanca ---");
    let casablanca = Coordinate::new(33.5731, -7.5898);
    let criteria = FilterCriteria::new().with_max_distance_km(150.0);
    for result in dir.search(&criteria, Some(casablanca), &favorites) {
        println!(
            "- {} ({}, {:.1} km)",
            result.store.name(),
            result.store.city(),
            result.distance_km_or_zero()
        );
    }
    println!();

    // Example 5: City filter uses folded equality, not substring
    println!("--- Example 5: Stores in Marrakech exactly ---");
    let criteria = FilterCriteria::new().with_city("marrakech");
    for result in dir.search(&criteria, None, &favorites) {
        println!("- {}", result.store.name());
    }
    println!();

    // Example 6: Stores grouped by city, largest first
    println!("--- Example 6: Store counts by city ---");
    let mut counts: Vec<(&str, usize)> = dir
        .cities()
        .into_iter()
        .map(|city| (city, dir.find_stores_in_city(city).len()))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    for (city, count) in counts {
        println!("- {city}: {count} store(s)");
    }

    Ok(())
}
