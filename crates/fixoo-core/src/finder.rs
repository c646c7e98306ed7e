// crates/fixoo-core/src/finder.rs

//! The store-finder session: the view-mount orchestrator tying directory,
//! criteria, location state, favorites and the selection handoff together.
//!
//! Single-threaded by design: every recomputation is synchronous and cheap
//! (catalogs are tens to low-hundreds of stores), so results always reflect
//! the latest inputs once callers stop mutating criteria. The only state
//! mutated outside the pure computation path is the favorite set and the
//! location state, both owned here.

use crate::error::{FixooError, Result};
use crate::favorites::{FavoriteSet, FavoritesController, FavoritesStore, NotificationSink};
use crate::filter::FilterCriteria;
use crate::location::{LocationProvider, LocationState};
use crate::model::{Directory, Store};
use crate::search::RankedStore;
use crate::selection::SelectionHandoff;
use crate::traits::StoreBackend;

pub struct StoreFinder<B: StoreBackend, S: FavoritesStore, N: NotificationSink> {
    directory: Directory<B>,
    criteria: FilterCriteria,
    location: LocationState,
    favorites: FavoritesController<S, N>,
    handoff: SelectionHandoff<B>,
    /// Ids of the most recent ranked view, used to validate selections.
    last_view: Vec<String>,
}

impl<B: StoreBackend, S: FavoritesStore, N: NotificationSink> StoreFinder<B, S, N> {
    /// Start a session over a loaded directory. Location starts `Pending`;
    /// ranking works in no-coordinate mode until a provider answers.
    pub fn new(directory: Directory<B>, favorites: FavoritesController<S, N>) -> Self {
        StoreFinder {
            directory,
            criteria: FilterCriteria::default(),
            location: LocationState::Pending,
            favorites,
            handoff: SelectionHandoff::new(),
            last_view: Vec::new(),
        }
    }

    pub fn directory(&self) -> &Directory<B> {
        &self.directory
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn location(&self) -> LocationState {
        self.location
    }

    /// Ask the injected provider for a position, once per session mount.
    /// Denied/unavailable outcomes are recorded as stable degraded states,
    /// never surfaced as errors.
    pub fn resolve_location(&mut self, provider: &impl LocationProvider) {
        self.location = provider.request_location().into();
    }

    pub fn favorites(&self) -> &FavoriteSet {
        self.favorites.favorites()
    }

    pub fn is_favorite(&self, store_id: &str) -> bool {
        self.favorites.is_favorite(store_id)
    }

    /// Toggle a store in the favorite set; errors on unknown ids.
    /// Returns `true` when the store ends up favorited.
    pub fn toggle_favorite(&mut self, store_id: &str) -> Result<bool> {
        let store = self
            .directory
            .find_store_by_id(store_id)
            .ok_or_else(|| FixooError::NotFound(format!("store '{store_id}'")))?;
        Ok(self.favorites.toggle(store))
    }

    /// Access the notification sink, e.g. to drain collected events.
    pub fn notifications(&mut self) -> &mut N {
        self.favorites.sink_mut()
    }

    /// Recompute the ranked view from the current inputs.
    ///
    /// Pure given (criteria, location, favorites, catalog); also records
    /// the result ids so a later [`StoreFinder::select_store`] can be
    /// validated against what the user actually saw.
    pub fn results(&mut self) -> Vec<RankedStore<'_, B>> {
        let ranked = self.directory.search(
            &self.criteria,
            self.location.coordinate(),
            self.favorites.favorites(),
        );
        self.last_view = ranked.iter().map(|r| r.store.id().to_string()).collect();
        ranked
    }

    /// Record the user's chosen store in the handoff slot.
    ///
    /// The id must be part of the most recent ranked view: a stale or
    /// filtered-out selection is rejected with
    /// [`FixooError::InvalidSelection`] rather than silently accepted.
    pub fn select_store(&mut self, store_id: &str) -> Result<()> {
        if !self.last_view.iter().any(|id| id == store_id) {
            return Err(FixooError::InvalidSelection(store_id.to_string()));
        }
        let store = self
            .directory
            .find_store_by_id(store_id)
            .ok_or_else(|| FixooError::InvalidSelection(store_id.to_string()))?;
        self.handoff.select(store.clone());
        Ok(())
    }

    /// Peek at the pending selection without consuming it.
    pub fn selection(&self) -> Option<&Store<B>> {
        self.handoff.peek()
    }

    /// Consume the handoff slot; the registration/login flow owns the
    /// value from here on.
    pub fn take_selection(&mut self) -> Option<Store<B>> {
        self.handoff.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::{MemorySink, NullStore};
    use crate::geo::Coordinate;
    use crate::location::{FixedLocation, LocationFix, NoLocation};
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

    fn finder() -> StoreFinder<DefaultBackend, NullStore, MemorySink> {
        let raw: StoresRaw = vec![
            raw("1", "TechFix Marrakech", "Marrakech", 31.6295, -7.9811, 4.8),
            raw("2", "QuickRepair Casablanca", "Casablanca", 33.5731, -7.5898, 4.5),
            raw("3", "Digital Solutions Rabat", "Rabat", 34.0209, -6.8416, 4.7),
        ];
        StoreFinder::new(
            build_directory(raw),
            FavoritesController::new(NullStore, MemorySink::default()),
        )
    }

    #[test]
    fn pending_location_ranks_in_catalog_order() {
        let mut f = finder();
        assert!(f.location().is_pending());
        let out = f.results();
        let ids: Vec<&str> = out.iter().map(|r| r.store.id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn granted_location_sorts_and_bounds() {
        let mut f = finder();
        f.resolve_location(&FixedLocation(Coordinate::new(31.6295, -7.9811)));
        assert_eq!(
            f.location().coordinate(),
            Some(Coordinate::new(31.6295, -7.9811))
        );

        f.criteria_mut().max_distance_km = 100.0;
        let out = f.results();
        let ids: Vec<&str> = out.iter().map(|r| r.store.id()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn degraded_location_never_blocks_search() {
        let mut f = finder();
        f.resolve_location(&NoLocation);
        assert!(f.location().is_degraded());
        f.criteria_mut().query = "casa".into();
        let out = f.results();
        assert_eq!(out.len(), 1);
        assert!(out[0].distance_km.is_none());
    }

    #[test]
    fn selection_must_come_from_the_current_view() {
        let mut f = finder();

        // Nothing ranked yet: everything is rejected.
        assert!(matches!(
            f.select_store("1"),
            Err(FixooError::InvalidSelection(_))
        ));

        f.criteria_mut().query = "casa".into();
        f.results();

        // "1" was filtered out of the view the user saw.
        assert!(f.select_store("1").is_err());
        f.select_store("2").unwrap();
        assert_eq!(f.selection().map(|s| s.id()), Some("2"));

        // Read-once: the slot empties on take.
        let chosen = f.take_selection().unwrap();
        assert_eq!(chosen.name(), "QuickRepair Casablanca");
        assert!(f.take_selection().is_none());
    }

    #[test]
    fn favorites_flow_through_the_session() {
        let mut f = finder();
        f.results();
        assert!(f.toggle_favorite("3").unwrap());
        assert!(f.is_favorite("3"));

        f.criteria_mut().favorites_only = true;
        let out = f.results();
        let ids: Vec<&str> = out.iter().map(|r| r.store.id()).collect();
        assert_eq!(ids, vec!["3"]);
        assert_eq!(f.notifications().events.len(), 1);

        assert!(matches!(
            f.toggle_favorite("99"),
            Err(FixooError::NotFound(_))
        ));
    }

    #[test]
    fn latest_inputs_win_after_rapid_changes() {
        let mut f = finder();
        f.resolve_location(&FixedLocation(Coordinate::new(31.6295, -7.9811)));
        // Simulated fast typing: only the settled query matters.
        for q in ["c", "ca", "cas", "casa"] {
            f.criteria_mut().query = q.into();
            let _ = f.results();
        }
        let out = f.results();
        let ids: Vec<&str> = out.iter().map(|r| r.store.id()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn location_fix_variants_map_to_states() {
        struct DeniedProvider;
        impl LocationProvider for DeniedProvider {
            fn request_location(&self) -> LocationFix {
                LocationFix::PermissionDenied
            }
        }

        let mut f = finder();
        f.resolve_location(&DeniedProvider);
        assert_eq!(f.location(), LocationState::Denied);
    }
}
