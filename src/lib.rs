// file: src/lib.rs
// version: 1.0.0
// guid: 3f8c21aa-94d6-4f0e-bb2a-6d1c5a90e7f4

//! # procvol
//!
//! A command-line utility for terminating processes by identifier or name and
//! for listing mounted filesystem volumes with capacity statistics.
//!
//! All operating-system access goes through the [`process::ProcessProvider`]
//! and [`volume::VolumeProvider`] traits so handlers can be exercised against
//! deterministic fakes instead of the live process and mount tables.

pub mod cli;
pub mod error;
pub mod logging;
pub mod process;
pub mod volume;

pub use error::{ProcvolError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
