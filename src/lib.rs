//! lookctl - desktop appearance control
//!
//! Discovers installed GTK, icon, and cursor themes and keeps the live
//! desktop settings and the per-toolkit settings files in step.

pub mod app;
pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod selector;
pub mod settings;
pub mod test_utils;

pub use error::{LookError, Result, StoreError};
