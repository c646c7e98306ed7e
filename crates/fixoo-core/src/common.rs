use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the directory.
///
/// Returned by [`Directory::stats`](crate::model::Directory::stats), these
/// counts reflect the materialized in-memory catalog after loading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DirStats {
    pub stores: usize,
    pub cities: usize,
    pub services: usize,
}
