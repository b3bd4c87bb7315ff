// src/core/mod.rs

//! The central module containing the core logic and data structures of StreamGrid.

pub mod cluster;
pub mod errors;

pub use errors::StreamGridError;
