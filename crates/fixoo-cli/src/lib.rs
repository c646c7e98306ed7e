//! fixoo-cli
//! ==========
//!
//! Command-line interface for the `fixoo-core` store directory.
//!
//! This crate primarily provides a binary (`fixoo-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! fixoo-cli --help
//! fixoo-cli stats
//! fixoo-cli stores
//! fixoo-cli search casa
//! fixoo-cli search --near 31.63,-7.98 --max-distance 100
//! fixoo-cli fav add 1
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! `fixoo-core` crate directly.
//!
//! Links
//! -----
//! - Core crate: <https://docs.rs/fixoo-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
