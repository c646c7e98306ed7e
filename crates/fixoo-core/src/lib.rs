// crates/fixoo-core/src/lib.rs

//! fixoo-core — store directory and ranking engine for the Fixoo
//! device-repair service.
//!
//! The crate owns the candidate list of repair stores, applies filter
//! predicates (text query, city, minimum rating, service tags,
//! favorites-only, maximum distance), computes distance-from-user via
//! great-circle geometry, and returns a ranked view. It also exposes the
//! favorites controller (with notification events) and the one-shot
//! selection handoff used to carry a chosen store into registration.
//!
//! Persistence, geolocation and notification rendering are injected
//! capabilities ([`loader::StoreSource`], [`location::LocationProvider`],
//! [`favorites::FavoritesStore`], [`favorites::NotificationSink`]), never
//! ambient globals, so everything is mockable in tests.

pub mod common;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod finder;
pub mod geo;
pub mod loader; // The public loader
pub mod location;
pub mod model;
pub mod search; // The ranking logic
pub mod selection;
pub mod text; // Folded matching helpers
pub mod traits;

// Re-exports
pub use crate::common::DirStats;
pub use crate::error::{FixooError, Result};
pub use crate::favorites::{
    FavoriteSet, FavoritesController, FavoritesStore, Notification, NotificationKind,
    NotificationSink,
};
pub use crate::filter::FilterCriteria;
pub use crate::finder::StoreFinder;
pub use crate::geo::{haversine_km, Coordinate};
pub use crate::location::{LocationFix, LocationProvider, LocationState};
pub use crate::model::{
    build_directory, DefaultBackend, DefaultDirectory, Directory, StandardBackend, Store,
    Weekday,
};
pub use crate::search::RankedStore;
pub use crate::selection::SelectionHandoff;
pub use crate::traits::{NameMatch, StoreBackend};

/// Convenient glob import for demos and downstream crates.
pub mod prelude {
    pub use crate::common::DirStats;
    pub use crate::error::{FixooError, Result};
    pub use crate::favorites::{
        FavoriteSet, FavoritesController, FavoritesStore, MemorySink, Notification,
        NotificationKind, NotificationSink, NullSink, NullStore,
    };
    pub use crate::filter::FilterCriteria;
    pub use crate::finder::StoreFinder;
    pub use crate::geo::{haversine_km, Coordinate};
    pub use crate::location::{
        FixedLocation, LocationFix, LocationProvider, LocationState, NoLocation,
    };
    pub use crate::model::{
        build_directory, DefaultBackend, DefaultDirectory, Directory, StandardBackend, Store,
        Weekday,
    };
    pub use crate::search::RankedStore;
    pub use crate::selection::SelectionHandoff;
    pub use crate::traits::{NameMatch, StoreBackend};

    #[cfg(feature = "json")]
    pub use crate::favorites::JsonFileStore;
    #[cfg(feature = "json")]
    pub use crate::loader::JsonCatalog;
    pub use crate::loader::StoreSource;
}
