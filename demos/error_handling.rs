//! Error handling example for fixoo-rs
//!
//! This example demonstrates proper error handling and edge cases

use fixoo_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Fixoo-RS Error Handling Example ===\n");

    // Example 1: Handling catalog load errors
    println!("--- Example 1: Loading catalog with error handling ---");
    match Directory::<StandardBackend>::load() {
        Ok(dir) => {
            println!("✓ Catalog loaded successfully");
            println!("  Stores: {}", dir.store_count());
        }
        Err(e) => {
            eprintln!("✗ Failed to load catalog: {e}");
            return Err(e);
        }
    }
    println!();

    let dir = Directory::<StandardBackend>::load()?;

    // Example 2: Handling missing stores
    println!("--- Example 2: Searching for non-existent stores ---");
    let ids = vec!["99", "abc", ""];
    for id in ids {
        match dir.find_store_by_id(id) {
            Some(store) => println!("  Found: {} ({})", store.name(), store.id()),
            None => println!("  Not found: {id:?}"),
        }
    }
    println!();

    // Example 3: Loading from a bad path
    println!("--- Example 3: Loading from a missing file ---");
    match Directory::<StandardBackend>::load_from_path("/no/such/catalog.json") {
        Ok(_) => println!("  Unexpectedly loaded"),
        Err(e) => println!("  Expected error: {e}"),
    }
    println!();

    // Example 4: Selection must come from the last ranked view
    println!("--- Example 4: Rejecting a stale selection ---");
    let favorites = FavoritesController::new(NullStore, MemorySink::default());
    let mut finder = StoreFinder::new(dir.clone(), favorites);
    finder.set_criteria(FilterCriteria::new().with_city("Marrakech"));
    let visible: Vec<String> = finder
        .results()
        .iter()
        .map(|r| r.store.id().to_string())
        .collect();
    println!("  Visible stores: {visible:?}");

    match finder.select_store("2") {
        Ok(()) => println!("  Unexpectedly selected a filtered-out store"),
        Err(e) => println!("  Expected error: {e}"),
    }
    match finder.select_store("1") {
        Ok(()) => println!("  ✓ Selected a visible store"),
        Err(e) => println!("  Unexpected error: {e}"),
    }
    println!();

    // Example 5: Toggling a favorite for an unknown id
    println!("--- Example 5: Favoriting an unknown store ---");
    match finder.toggle_favorite("does-not-exist") {
        Ok(_) => println!("  Unexpectedly favorited"),
        Err(e) => println!("  Expected error: {e}"),
    }

    Ok(())
}
