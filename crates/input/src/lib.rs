//! Terminal input module (controller-facing).
//!
//! This module is intentionally independent of the camera logic. It maps
//! `crossterm` key, mouse and resize events into [`crate::types::ViewEvent`]s
//! expressed in canvas pixels.

pub mod map;

pub use iso_grid_types as types;

pub use map::{cell_to_canvas, handle_key_event, handle_mouse_event, map_event, should_quit};
