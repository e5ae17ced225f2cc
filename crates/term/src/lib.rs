//! Terminal "grid renderer" module.
//!
//! This is a small rendering layer for drawing the isometric grid in a
//! terminal. Shapes are rasterized into a pixel canvas, folded into a
//! framebuffer of half-block cells, and that framebuffer is flushed to the
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a window canvas
//! - Square pixels: one column by half a row per pixel

pub mod canvas;
pub mod fb;
pub mod frame_limiter;
pub mod grid_view;
pub mod renderer;

pub use iso_grid_core as core;
pub use iso_grid_types as types;

pub use canvas::PixelCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frame_limiter::FrameLimiter;
pub use grid_view::{overlay_lines, GridView, Palette, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
