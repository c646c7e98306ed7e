//! fixoo-wasm — WebAssembly bindings for fixoo-core
//!
//! This crate exposes a small, ergonomic JS/WASM API built on top of
//! `fixoo-core`. It embeds the store catalog in the WASM binary and
//! provides search, favorites, and notification helpers callable from
//! JavaScript.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Basic queries: `store_count()`, `store_name(id)`, `get_stats()`
//! - Enumerations: `list_cities()`, `list_services()`
//! - Search helpers returning JSON-serializable objects:
//!   - `search_stores("casa")` (no position, catalog order)
//!   - `ranked_search("", 31.63, -7.98, 100.0)` (distance-sorted)
//! - Favorites with notification events:
//!   - `toggle_favorite("1")`, `is_favorite("1")`, `list_favorites()`
//!   - `take_notifications()` drains the pending event queue
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { store_count, ranked_search } from 'fixoo-wasm';
//!
//! async function main() {
//!   await init(); // initializes the embedded catalog
//!   console.log('Stores:', store_count());
//!
//!   const results = ranked_search('', 31.6295, -7.9811, 100);
//!   // results is a JSON array of { id, name, city, rating, distanceKm }
//!   console.log(results);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The WASM build embeds the bundled `stores.json`. If you customize the
//!   catalog, rebuild the crate to refresh the embedded data.
//! - All exported functions are `wasm_bindgen` bindings and return plain
//!   types or `JsValue` containing JSON-serializable arrays/objects.
//! - Favorites live in WASM memory for the session; the host is expected
//!   to drain `take_notifications()` and mirror the set into its own
//!   storage if persistence is wanted.

use std::sync::{Mutex, OnceLock};
use wasm_bindgen::prelude::*;

use fixoo_core::prelude::*;
use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen::to_value;

// The catalog shipped inside the binary. Parsed once on first access.
static EMBEDDED_CATALOG: &str = include_str!("../../fixoo-core/data/stores.json");

static DIRECTORY: OnceLock<DefaultDirectory> = OnceLock::new();
static FAVORITES: OnceLock<Mutex<FavoritesController<NullStore, MemorySink>>> = OnceLock::new();

fn directory() -> &'static DefaultDirectory {
    DIRECTORY.get_or_init(|| {
        DefaultDirectory::from_json_str(EMBEDDED_CATALOG)
            .expect("embedded catalog must be valid JSON")
    })
}

fn favorites() -> &'static Mutex<FavoritesController<NullStore, MemorySink>> {
    FAVORITES.get_or_init(|| Mutex::new(FavoritesController::new(NullStore, MemorySink::default())))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing Fixoo WASM module...".into());

    let stats = directory().stats();
    web_sys::console::log_1(&format!("✓ Loaded {} stores", stats.stores).into());
}

/// JSON view sent over the boundary for a single store.
///
/// Carries everything the host screens need: coordinates for map pins and
/// the weekly schedule for the store-details modal.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoreView<'a> {
    id: &'a str,
    name: &'a str,
    address: &'a str,
    city: &'a str,
    phone: &'a str,
    email: &'a str,
    latitude: f64,
    longitude: f64,
    rating: f64,
    services: &'a [String],
    working_hours: HoursView<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_km: Option<f64>,
}

#[derive(Serialize)]
struct HoursView<'a> {
    monday: &'a str,
    tuesday: &'a str,
    wednesday: &'a str,
    thursday: &'a str,
    friday: &'a str,
    saturday: &'a str,
    sunday: &'a str,
}

impl<'a> StoreView<'a> {
    fn new(store: &'a Store<DefaultBackend>, distance_km: Option<f64>) -> Self {
        let pos = store.coordinate();
        StoreView {
            id: store.id(),
            name: store.name(),
            address: store.address(),
            city: store.city(),
            phone: store.phone(),
            email: store.email(),
            latitude: pos.lat,
            longitude: pos.lng,
            rating: store.rating(),
            services: store.services(),
            working_hours: HoursView {
                monday: store.hours_on(Weekday::Monday),
                tuesday: store.hours_on(Weekday::Tuesday),
                wednesday: store.hours_on(Weekday::Wednesday),
                thursday: store.hours_on(Weekday::Thursday),
                friday: store.hours_on(Weekday::Friday),
                saturday: store.hours_on(Weekday::Saturday),
                sunday: store.hours_on(Weekday::Sunday),
            },
            distance_km,
        }
    }
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn store_count() -> usize {
    directory().store_count()
}

#[wasm_bindgen]
pub fn store_name(id: &str) -> Option<String> {
    directory().find_store_by_id(id).map(|s| s.name().to_string())
}

#[wasm_bindgen]
pub fn get_stats() -> JsValue {
    let stats = directory().stats();
    let stats = json!({
        "stores": stats.stores,
        "cities": stats.cities,
        "services": stats.services
    });

    to_value(&stats).unwrap()
}

/* --------------------------------------------------------------------------
   Enumerations
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn list_cities() -> JsValue {
    to_value(&directory().cities()).unwrap()
}

#[wasm_bindgen]
pub fn list_services() -> JsValue {
    to_value(&directory().services()).unwrap()
}

/* --------------------------------------------------------------------------
   Search
-------------------------------------------------------------------------- */

/// Text search with no position: catalog order, no distances.
#[wasm_bindgen]
pub fn search_stores(query: &str) -> JsValue {
    let criteria = FilterCriteria::new().with_query(query);
    let favs = favorites().lock().unwrap();

    // Map to JS serializable wrappers while preserving order
    let array = js_sys::Array::new();
    for r in directory().search(&criteria, None, favs.favorites()) {
        let v = to_value(&StoreView::new(r.store, r.distance_km)).unwrap();
        array.push(&v);
    }
    array.into()
}

/// Full ranked search from a user position: filtered by text and a
/// distance bound, sorted nearest-first.
#[wasm_bindgen]
pub fn ranked_search(query: &str, lat: f64, lng: f64, max_distance_km: f64) -> JsValue {
    let criteria = FilterCriteria::new()
        .with_query(query)
        .with_max_distance_km(max_distance_km);
    let user = Coordinate::new(lat, lng);
    let favs = favorites().lock().unwrap();

    let out: Vec<_> = directory()
        .search(&criteria, Some(user), favs.favorites())
        .into_iter()
        .map(|r| StoreView::new(r.store, r.distance_km))
        .collect();

    to_value(&out).unwrap()
}

/* --------------------------------------------------------------------------
   Favorites
-------------------------------------------------------------------------- */

/// Heart-button toggle. Returns `true` when the store ends up favorited,
/// `None` for an unknown id.
#[wasm_bindgen]
pub fn toggle_favorite(id: &str) -> Option<bool> {
    let store = directory().find_store_by_id(id)?;
    let mut favs = favorites().lock().unwrap();
    Some(favs.toggle(store))
}

#[wasm_bindgen]
pub fn is_favorite(id: &str) -> bool {
    favorites().lock().unwrap().is_favorite(id)
}

#[wasm_bindgen]
pub fn list_favorites() -> JsValue {
    let favs = favorites().lock().unwrap();
    let ids: Vec<&str> = favs.favorites().iter().collect();
    to_value(&ids).unwrap()
}

/// Drain and return the pending notification events as a JSON array of
/// `{ kind, title, message }`.
#[wasm_bindgen]
pub fn take_notifications() -> JsValue {
    let mut favs = favorites().lock().unwrap();
    let events = std::mem::take(&mut favs.sink_mut().events);
    to_value(&events).unwrap()
}
