// crates/fixoo-core/src/favorites.rs

//! Favorites controller and its collaborator traits.
//!
//! The controller owns the in-memory [`FavoriteSet`] and, on every
//! successful mutation, emits one [`Notification`] and fires a best-effort
//! save through the injected [`FavoritesStore`]. A failing save is logged
//! and swallowed so the set the user just observed change is never rolled
//! back.

use crate::error::Result;
use crate::model::Store;
use crate::traits::StoreBackend;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A persisted set of favorite store ids.
///
/// Insertion-ordered, duplicate-free. Adding a present id and removing an
/// absent id are both no-ops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        FavoriteSet::default()
    }

    /// Insert an id; returns `true` if it was newly added.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Remove an id; returns `true` if it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|x| x != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl FromIterator<String> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            set.insert(&id);
        }
        set
    }
}

/// Category of a user-facing notification event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    RepairUpdate,
    StorePromotion,
    System,
}

/// A fire-and-forget notification event for the UI surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Sink for notification events. Fire-and-forget, no acknowledgement.
pub trait NotificationSink {
    fn notify(&mut self, event: Notification);
}

/// Discards all events.
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _event: Notification) {}
}

/// Collects events in memory, mostly for tests and demos.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub events: Vec<Notification>,
}

impl NotificationSink for MemorySink {
    fn notify(&mut self, event: Notification) {
        self.events.push(event);
    }
}

/// Persistence collaborator for the favorite set.
///
/// `save` is invoked on every mutation; failures are handled by the
/// controller (logged, never propagated).
pub trait FavoritesStore {
    fn load(&self) -> Result<FavoriteSet>;
    fn save(&self, favorites: &FavoriteSet) -> Result<()>;
}

/// No persistence: favorites live for the session only.
pub struct NullStore;

impl FavoritesStore for NullStore {
    fn load(&self) -> Result<FavoriteSet> {
        Ok(FavoriteSet::new())
    }

    fn save(&self, _favorites: &FavoriteSet) -> Result<()> {
        Ok(())
    }
}

/// JSON-file persistence, the CLI analogue of the browser's localStorage.
///
/// A missing file loads as an empty set; everything else is an error the
/// controller will log and swallow.
#[cfg(feature = "json")]
pub struct JsonFileStore {
    path: std::path::PathBuf,
}

#[cfg(feature = "json")]
impl JsonFileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }
}

#[cfg(feature = "json")]
impl FavoritesStore for JsonFileStore {
    fn load(&self) -> Result<FavoriteSet> {
        if !self.path.exists() {
            return Ok(FavoriteSet::new());
        }
        let bytes = std::fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&self, favorites: &FavoriteSet) -> Result<()> {
        let json = serde_json::to_vec_pretty(favorites)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Exposes add/remove/query over the favorite set and emits one
/// notification event per successful mutation.
pub struct FavoritesController<S: FavoritesStore, N: NotificationSink> {
    favorites: FavoriteSet,
    store: S,
    sink: N,
}

impl<S: FavoritesStore, N: NotificationSink> FavoritesController<S, N> {
    /// Build a controller, loading the persisted set. A failed load starts
    /// from an empty set rather than failing the session.
    pub fn new(store: S, sink: N) -> Self {
        let favorites = match store.load() {
            Ok(set) => set,
            Err(e) => {
                warn!("failed to load favorites, starting empty: {e}");
                FavoriteSet::new()
            }
        };
        FavoritesController {
            favorites,
            store,
            sink,
        }
    }

    /// Current favorite set.
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// The injected notification sink (e.g. to drain collected events).
    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    /// Pure membership query.
    pub fn is_favorite(&self, store_id: &str) -> bool {
        self.favorites.contains(store_id)
    }

    /// Add a store to the favorites. Idempotent: a duplicate add produces
    /// no duplicate entry and no notification event.
    pub fn add<B: StoreBackend>(&mut self, store: &Store<B>) -> bool {
        if !self.favorites.insert(store.id()) {
            return false;
        }
        self.sink.notify(Notification {
            kind: NotificationKind::System,
            title: "Magasin ajouté aux favoris".to_string(),
            message: format!("{} a été ajouté à vos magasins favoris.", store.name()),
        });
        self.persist();
        true
    }

    /// Remove a store from the favorites. Idempotent; one event per
    /// successful removal.
    pub fn remove<B: StoreBackend>(&mut self, store: &Store<B>) -> bool {
        if !self.favorites.remove(store.id()) {
            return false;
        }
        self.sink.notify(Notification {
            kind: NotificationKind::System,
            title: "Magasin retiré des favoris".to_string(),
            message: format!("{} a été retiré de vos magasins favoris.", store.name()),
        });
        self.persist();
        true
    }

    /// The heart-button gesture: add if absent, remove if present.
    /// Returns `true` when the store ends up favorited.
    pub fn toggle<B: StoreBackend>(&mut self, store: &Store<B>) -> bool {
        if self.is_favorite(store.id()) {
            self.remove(store);
            false
        } else {
            self.add(store);
            true
        }
    }

    // Fire-and-forget save. The in-memory set stays authoritative even if
    // the write fails.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.favorites) {
            warn!("failed to persist favorites: {e}");
        }
    }
}
