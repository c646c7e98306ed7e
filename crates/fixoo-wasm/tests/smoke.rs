use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use fixoo_wasm::{is_favorite, store_count, store_name, toggle_favorite};

#[wasm_bindgen_test]
fn can_get_store_count() {
    // Ensure module is initialized (defensive; start() should run automatically)
    #[cfg(target_arch = "wasm32")]
    fixoo_wasm::start();

    let count = store_count();
    assert!(count > 0, "expected at least one store, got {count}");
}

#[wasm_bindgen_test]
fn can_lookup_store_name() {
    #[cfg(target_arch = "wasm32")]
    fixoo_wasm::start();

    let name = store_name("1");
    assert!(name.is_some());
}

#[wasm_bindgen_test]
fn favorite_toggle_round_trips() {
    #[cfg(target_arch = "wasm32")]
    fixoo_wasm::start();

    assert_eq!(toggle_favorite("1"), Some(true));
    assert!(is_favorite("1"));
    assert_eq!(toggle_favorite("1"), Some(false));
    assert!(!is_favorite("1"));
    assert_eq!(toggle_favorite("no-such-id"), None);
}
