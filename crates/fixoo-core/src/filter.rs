// crates/fixoo-core/src/filter.rs

use crate::favorites::FavoriteSet;
use crate::model::Store;
use crate::text::{contains_folded, equals_folded};
use crate::traits::StoreBackend;

/// User-specified constraints applied to the catalog on every recomputation.
///
/// All dimensions compose conjunctively (AND); the service-tag dimension is
/// OR within itself (a store passes if it offers at least one requested
/// tag). The distance bound is *not* evaluated here; it depends on whether
/// a user coordinate exists at all and lives in the ranking stage
/// ([`Directory::search`](crate::model::Directory::search)).
///
/// `Default` means "no filter": empty query, no city, `min_rating` 0,
/// unbounded distance, no service tags, favorites off.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Free-text query, matched folded against name OR city OR address.
    pub query: String,
    /// Exact-city selection (folded equality). `None` passes everything.
    pub city: Option<String>,
    /// Minimum aggregate rating; 0.0 means no floor.
    pub min_rating: f64,
    /// Maximum distance in km, only applied when a user coordinate exists.
    pub max_distance_km: f64,
    /// Required service tags, OR semantics. Empty passes everything.
    pub services: Vec<String>,
    /// Restrict to the favorite set.
    pub favorites_only: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            query: String::new(),
            city: None,
            min_rating: 0.0,
            max_distance_km: f64::INFINITY,
            services: Vec::new(),
            favorites_only: false,
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        FilterCriteria::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_max_distance_km(mut self, max_distance_km: f64) -> Self {
        self.max_distance_km = max_distance_km;
        self
    }

    pub fn with_service(mut self, tag: impl Into<String>) -> Self {
        self.services.push(tag.into());
        self
    }

    pub fn favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }

    /// Toggle a service tag in the filter, the checkbox gesture.
    pub fn toggle_service(&mut self, tag: &str) {
        if let Some(pos) = self.services.iter().position(|t| equals_folded(t, tag)) {
            self.services.remove(pos);
        } else {
            self.services.push(tag.to_string());
        }
    }

    /// True when the store passes every non-distance dimension.
    ///
    /// Deterministic: identical inputs always produce the identical verdict.
    pub fn accepts<B: StoreBackend>(&self, store: &Store<B>, favorites: &FavoriteSet) -> bool {
        self.matches_query(store)
            && self.matches_city(store)
            && store.rating() >= self.min_rating
            && self.matches_services(store)
            && (!self.favorites_only || favorites.contains(store.id()))
    }

    fn matches_query<B: StoreBackend>(&self, store: &Store<B>) -> bool {
        let q = self.query.trim();
        if q.is_empty() {
            return true;
        }
        contains_folded(store.name(), q)
            || contains_folded(store.city(), q)
            || contains_folded(store.address(), q)
    }

    fn matches_city<B: StoreBackend>(&self, store: &Store<B>) -> bool {
        match &self.city {
            Some(city) if !city.is_empty() => equals_folded(store.city(), city),
            _ => true,
        }
    }

    fn matches_services<B: StoreBackend>(&self, store: &Store<B>) -> bool {
        if self.services.is_empty() {
            return true;
        }
        self.services.iter().any(|tag| store.offers_service(tag))
    }
}
