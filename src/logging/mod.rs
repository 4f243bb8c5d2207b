// file: src/logging/mod.rs
// version: 1.0.0
// guid: 5c0b84f7-2d6e-49a1-b5c8-0f7d3e92a614

//! Logging for procvol

pub mod logger;
