// file: src/cli/mod.rs
// version: 1.0.0
// guid: b1e6f0c3-58d2-4a17-8c9e-d4a70f2b3861

//! Command line interface for procvol

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
