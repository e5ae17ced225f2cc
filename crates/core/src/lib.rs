//! Core view logic module - pure, deterministic, and testable
//!
//! This module contains the isometric projection, camera math and the input
//! controller. It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: the same event sequence always yields the same camera
//! - **Testable**: projection and zoom invariants are checked in unit tests
//! - **Portable**: the renderer and the terminal backend only consume its output
//!
//! # Module Structure
//!
//! - [`projection`]: grid ⇄ canvas transform and tile diamonds
//! - [`camera`]: pan and zoom-at-cursor as pure `Camera -> Camera` functions
//! - [`controller`]: drag state, overlay toggle and event dispatch
//!
//! # Example
//!
//! ```
//! use iso_grid_core::{CanvasSize, Projection};
//! use iso_grid_types::{Camera, ZoomLimits};
//!
//! let camera = Camera::new(&ZoomLimits::new(0.1, 5.0, 0.1));
//! let projection = Projection::new(&camera, 60, CanvasSize::new(800.0, 600.0));
//!
//! assert_eq!(projection.grid_to_screen(0, 0), (400.0, 75.0));
//! assert_eq!(projection.grid_to_screen(1, 0), (430.0, 90.0));
//! ```

pub mod camera;
pub mod controller;
pub mod projection;

pub use iso_grid_types as types;

pub use camera::{pan, zoom_at};
pub use controller::{Control, DragState, ViewController, DRAG_BUTTON};
pub use projection::{tile_size, tiles, CanvasSize, Diamond, Projection};
