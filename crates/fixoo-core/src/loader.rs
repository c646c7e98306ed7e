// crates/fixoo-core/src/loader.rs

//! # Catalog Loader
//!
//! Handles the physical layer (I/O, decompression) of getting the store
//! catalog into memory, and defines [`StoreSource`], the injected
//! capability the engine consumes instead of reaching for a concrete file
//! or network fetch.

use crate::error::{FixooError, Result};
use crate::model::{build_directory, DefaultBackend, Directory, StoresRaw};
use crate::traits::StoreBackend;
#[cfg(feature = "json")]
use once_cell::sync::OnceCell;
#[cfg(feature = "json")]
use std::fs::File;
#[cfg(feature = "json")]
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

// Single in-process cache so we only deserialize once per process.
#[cfg(feature = "json")]
static DIRECTORY_CACHE: OnceCell<Directory<DefaultBackend>> = OnceCell::new();

/// The store-catalog collaborator: idempotent and side-effect-free from
/// the engine's perspective. Implementors return the raw records; the
/// engine builds the typed directory via [`build_directory`].
pub trait StoreSource {
    fn list_stores(&self) -> Result<StoresRaw>;
}

/// Reads a catalog from a JSON (or gzipped JSON) file.
#[cfg(feature = "json")]
pub struct JsonCatalog {
    path: PathBuf,
}

#[cfg(feature = "json")]
impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonCatalog { path: path.into() }
    }
}

#[cfg(feature = "json")]
impl StoreSource for JsonCatalog {
    fn list_stores(&self) -> Result<StoresRaw> {
        let reader = open_stream(&self.path)?;
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Directory<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_catalog_filename() -> &'static str {
        "stores.json"
    }

    /// Load the directory using the bundled catalog.
    ///
    /// - Tries to read `data/stores.bin` (bincode cache).
    /// - If that fails, falls back to `data/stores.json`, builds the
    ///   directory, and writes the `.bin` cache best-effort.
    ///
    /// The paths are resolved relative to the crate root
    /// (`CARGO_MANIFEST_DIR`), so this works both when running the demos
    /// from the project and when using the crate as a dependency (as long
    /// as the `data/` directory is shipped alongside). Loaded once per
    /// process.
    #[cfg(feature = "json")]
    pub fn load() -> Result<Self> {
        DIRECTORY_CACHE.get_or_try_init(load_from_disk).cloned()
    }

    /// Load a catalog from an explicit path (`.json`, `.json.gz` or a
    /// `.bin` cache written by an earlier run).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if path.extension().is_some_and(|e| e == "bin") {
            let bytes = std::fs::read(path).map_err(|e| {
                FixooError::NotFound(format!("catalog not found at {}: {e}", path.display()))
            })?;
            return Ok(bincode::deserialize(&bytes)?);
        }

        #[cfg(feature = "json")]
        {
            let reader = open_stream(path)?;
            let raw: StoresRaw = serde_json::from_reader(reader)?;
            return Ok(build_directory(raw));
        }

        #[cfg(not(feature = "json"))]
        Err(FixooError::NotFound(format!(
            "JSON support disabled; cannot read {}",
            path.display()
        )))
    }
}

impl<B: StoreBackend> Directory<B> {
    /// Build a directory from any injected source. An empty catalog is not
    /// an error; it yields an empty directory and empty ranked results.
    pub fn from_source(source: &impl StoreSource) -> Result<Self> {
        Ok(build_directory(source.list_stores()?))
    }

    /// Parse a catalog from an in-memory JSON string (embedded payloads,
    /// remote fetch responses).
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: StoresRaw = serde_json::from_str(json)?;
        Ok(build_directory(raw))
    }
}

/// Internal helper that actually reads from disk and builds the directory.
#[cfg(feature = "json")]
fn load_from_disk() -> Result<Directory<DefaultBackend>> {
    let data_dir = Directory::<DefaultBackend>::default_data_dir();
    let json_path = data_dir.join(Directory::<DefaultBackend>::default_catalog_filename());
    let bin_path = data_dir.join("stores.bin");

    // 1) Try binary cache first
    if let Ok(bytes) = std::fs::read(&bin_path) {
        if let Ok(dir) = bincode::deserialize::<Directory<DefaultBackend>>(&bytes) {
            return Ok(dir);
        }
    }

    // 2) Fallback: read the JSON catalog and build
    let reader = open_stream(&json_path)?;
    let raw: StoresRaw = serde_json::from_reader(reader)?;
    let dir = build_directory::<DefaultBackend>(raw);

    // 3) Best-effort: write cache (ignore errors)
    if let Ok(bin) = bincode::serialize(&dir) {
        let _ = std::fs::write(&bin_path, bin);
    }

    Ok(dir)
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when the
/// extension says so. Returns a generic reader so callers don't care about
/// the compression.
#[cfg(feature = "json")]
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        FixooError::NotFound(format!("catalog not found at {}: {e}", path.display()))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|e| e == "gz") {
        use flate2::read::GzDecoder;
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_loads() {
        let dir = Directory::load().unwrap();
        assert_eq!(dir.store_count(), 8);
        assert!(dir.find_store_by_id("1").is_some());
    }

    #[test]
    fn load_is_cached_per_process() {
        let a = Directory::load().unwrap();
        let b = Directory::load().unwrap();
        assert_eq!(a.store_count(), b.store_count());
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = Directory::<DefaultBackend>::load_from_path("/no/such/catalog.json");
        assert!(matches!(err, Err(FixooError::NotFound(_))));
    }

    #[test]
    fn empty_catalog_is_fine() {
        let dir = Directory::<DefaultBackend>::from_json_str("[]").unwrap();
        assert_eq!(dir.store_count(), 0);
        assert!(dir.cities().is_empty());
    }

    #[test]
    fn json_source_round_trips_through_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{
                "id": "9",
                "name": "Atlas Repair",
                "address": "1 Rue Atlas",
                "city": "Ifrane",
                "phone": "+212 5 00 00 00 00",
                "email": "atlas@example.ma",
                "latitude": 33.5228,
                "longitude": -5.1106,
                "rating": 4.0,
                "services": ["Réparation téléphone"],
                "workingHours": {
                    "monday": "9:00 - 18:00",
                    "tuesday": "9:00 - 18:00",
                    "wednesday": "9:00 - 18:00",
                    "thursday": "9:00 - 18:00",
                    "friday": "9:00 - 18:00",
                    "saturday": "10:00 - 16:00",
                    "sunday": "Fermé"
                }
            }]"#,
        )
        .unwrap();

        let source = JsonCatalog::new(&path);
        let dir: Directory<DefaultBackend> = Directory::from_source(&source).unwrap();
        assert_eq!(dir.store_count(), 1);
        assert_eq!(dir.find_store_by_id("9").map(|s| s.city()), Some("Ifrane"));
    }
}
