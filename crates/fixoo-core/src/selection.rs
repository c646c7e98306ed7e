// crates/fixoo-core/src/selection.rs

use crate::model::Store;
use crate::traits::StoreBackend;

/// One-shot handoff slot carrying a chosen store into the downstream
/// registration/login flow.
///
/// The full store value is recorded, not just the id, because downstream
/// flows display store details before any account exists. The slot is
/// consumed with [`SelectionHandoff::take`]: read once, then the flow owns
/// the value. A later [`SelectionHandoff::select`] supersedes an unread
/// one.
#[derive(Debug, Clone, Default)]
pub struct SelectionHandoff<B: StoreBackend> {
    slot: Option<Store<B>>,
}

impl<B: StoreBackend> SelectionHandoff<B> {
    pub fn new() -> Self {
        SelectionHandoff { slot: None }
    }

    /// Record a chosen store, replacing any unconsumed one.
    pub fn select(&mut self, store: Store<B>) {
        self.slot = Some(store);
    }

    /// Consume the selection. Subsequent calls return `None` until a new
    /// store is selected.
    pub fn take(&mut self) -> Option<Store<B>> {
        self.slot.take()
    }

    /// Look at the pending selection without consuming it.
    pub fn peek(&self) -> Option<&Store<B>> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
