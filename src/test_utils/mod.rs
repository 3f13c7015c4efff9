//! Shared test utilities for lookctl.
//!
//! Used by the unit tests in this crate and by the integration tests under
//! `tests/`.

pub mod fixtures;
pub mod store;

pub use fixtures::AssetTree;
pub use store::MemoryStore;
