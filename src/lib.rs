//! travelmap-rs
//!
//! Umbrella crate of the workspace. It hosts the demos under `demos/` and
//! re-exports [`travelmap_core`] so they can be run from the workspace root.
pub use travelmap_core::*;
