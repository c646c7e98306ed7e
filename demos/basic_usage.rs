//! Basic usage example for fixoo-rs
//!
//! This example demonstrates how to:
//! - Load the store catalog
//! - Look up stores, cities, and service tags
//! - Run a ranked search from a user position
//! - Manage favorites

use fixoo_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Fixoo-RS Basic Usage Example ===\n");

    // Load the catalog
    println!("Loading store catalog...");
    let dir = Directory::<StandardBackend>::load()?;
    println!("✓ Catalog loaded successfully\n");

    // Example 1: List all stores
    println!("--- Example 1: List all stores ---");
    let stores = dir.stores();
    println!("Total stores: {}", stores.len());
    for (i, store) in stores.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, store.name(), store.city());
    }
    println!("... and {} more\n", stores.len() - 5);

    // Example 2: Find a specific store
    println!("--- Example 2: Find store by id ---");
    if let Some(store) = dir.find_store_by_id("1") {
        println!("Found: {}", store.name());
        println!("Address: {}, {}", store.address(), store.city());
        println!("Phone: {}", store.phone());
        println!("Rating: {:.1}/5", store.rating());
        println!("Services: {}", store.services().join(", "));
        println!("Monday hours: {}", store.hours_on(Weekday::Monday));
    }
    println!();

    // Example 3: Cities and service tags
    println!("--- Example 3: Cities and services ---");
    println!("Cities: {}", dir.cities().join(", "));
    println!("Services offered across the catalog:");
    for tag in dir.services() {
        println!("- {tag}");
    }
    println!();

    // Example 4: Ranked search from a position
    println!("--- Example 4: Nearest stores to Marrakech ---");
    let marrakech = Coordinate::new(31.6295, -7.9811);
    let criteria = FilterCriteria::new();
    let favorites = FavoriteSet::new();
    for result in dir.search(&criteria, Some(marrakech), &favorites).iter().take(5) {
        println!(
            "- {} ({:.1} km)",
            result.store.name(),
            result.distance_km_or_zero()
        );
    }
    println!();

    // Example 5: Favorites with notifications
    println!("--- Example 5: Favorites ---");
    let mut ctl = FavoritesController::new(NullStore, MemorySink::default());
    if let Some(store) = dir.find_store_by_id("1") {
        ctl.add(store);
    }
    println!("Favorites: {}", ctl.favorites().len());
    for event in &ctl.sink().events {
        println!("Notification: {} - {}", event.title, event.message);
    }

    Ok(())
}
