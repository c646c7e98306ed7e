//! fixoo-rs — workspace facade crate.
//!
//! Re-exports `fixoo-core` so the demos in `demos/` can use a single
//! `fixoo_rs::prelude::*` import. Library consumers should depend on
//! `fixoo-core` directly.

pub use fixoo_core::*;

pub mod prelude {
    pub use fixoo_core::prelude::*;
}
