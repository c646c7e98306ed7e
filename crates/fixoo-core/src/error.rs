// crates/fixoo-core/src/error.rs

use thiserror::Error;

/// Errors produced by the catalog loader and the selection handoff.
///
/// Degraded geolocation (denied / unavailable) is deliberately *not* an
/// error: the engine keeps working in no-coordinate mode and the state is
/// carried by [`crate::location::LocationState`] instead.
#[derive(Debug, Error)]
pub enum FixooError {
    /// A catalog or favorites file could not be found on disk.
    #[error("not found: {0}")]
    NotFound(String),

    /// The JSON catalog could not be parsed.
    #[cfg(feature = "json")]
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The binary catalog cache could not be read or written.
    #[error("cache error: {0}")]
    Cache(#[from] bincode::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A store id was selected that is not part of the most recent
    /// ranked view. See [`crate::finder::StoreFinder::select_store`].
    #[error("invalid selection: store '{0}' is not in the current result list")]
    InvalidSelection(String),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, FixooError>;
