//! Isometric grid viewer (workspace facade crate).
//!
//! This package exposes `iso_grid::{core,input,metrics,term,types}` while the
//! implementation lives in dedicated crates under `crates/`. Start-up concerns
//! (configuration and logging) live here next to the binary.

pub mod config;
pub mod logging;

pub use iso_grid_core as core;
pub use iso_grid_input as input;
pub use iso_grid_metrics as metrics;
pub use iso_grid_term as term;
pub use iso_grid_types as types;
