//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the viewer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (projection math, input mapping, rendering, sampling).
//!
//! # Coordinate Spaces
//!
//! - **Grid space**: integer `(x, y)` tile indices, `0..width` by `0..height`
//! - **Canvas space**: pixels, origin top-left. In the terminal one cell is
//!   one pixel wide and two pixels tall (upper/lower half block).
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TILE_SIZE` | 24 | Tile width in pixels at zoom 1.0 |
//! | `MIN_TILE_PX` | 4 | Smallest rendered tile width (keeps diamonds non-degenerate) |
//! | `TARGET_FPS` | 60 | Render cap and sampler cadence |
//! | `FPS_WINDOW_LEN` | 60 | Deltas averaged for the frame-rate estimate |
//! | `CPU_AVERAGE_TICKS` | 15 | Readings averaged per published CPU figure |
//! | `OUTLINE_WIDTH` | 2 | Tile border width in pixels |
//!
//! # Examples
//!
//! ```
//! use iso_grid_types::{Camera, GridSize, ZoomLimits};
//!
//! let limits = ZoomLimits::new(0.5, 2.0, 0.1);
//! assert_eq!(limits.clamp(3.0), 2.0);
//!
//! let camera = Camera::new(&limits);
//! assert_eq!(camera.zoom, 1.0);
//!
//! let grid = GridSize::new(0, 20);
//! assert_eq!(grid.width, 1);
//! ```

/// Tile width in pixels at zoom 1.0.
pub const DEFAULT_TILE_SIZE: u32 = 24;

/// Smallest tile width the projection will produce.
///
/// Half-height is `tile_size / 4`, so 4 keeps every diamond at least one pixel tall.
pub const MIN_TILE_PX: i32 = 4;

/// Target frame rate for the render loop and the metrics sampler.
pub const TARGET_FPS: u32 = 60;

/// Number of inter-sample deltas kept for the frame-rate estimate.
pub const FPS_WINDOW_LEN: usize = 60;

/// Number of CPU readings averaged into one published figure.
pub const CPU_AVERAGE_TICKS: usize = 15;

/// Tile border width in pixels.
pub const OUTLINE_WIDTH: u32 = 2;

/// Grid dimensions in tiles. Immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    /// Zero dimensions are clamped to 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn tile_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Zoom bounds and wheel step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
    /// Zoom change per unit of wheel delta.
    pub step: f32,
}

impl ZoomLimits {
    const FLOOR: f32 = 0.01;
    const DEFAULT_STEP: f32 = 0.1;

    /// Normalizes its inputs: bounds are made positive and ordered, step positive.
    pub fn new(min: f32, max: f32, step: f32) -> Self {
        let min = if min.is_finite() { min.max(Self::FLOOR) } else { Self::FLOOR };
        let max = if max.is_finite() { max.max(Self::FLOOR) } else { min };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            Self::DEFAULT_STEP
        };
        Self { min, max, step }
    }

    pub fn clamp(&self, zoom: f32) -> f32 {
        if zoom.is_nan() {
            return self.min;
        }
        zoom.clamp(self.min, self.max)
    }
}

/// Camera offset (canvas pixels) and zoom.
///
/// Owned by the render loop; update functions take and return it by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,
}

impl Camera {
    /// Camera at the origin with zoom 1.0 clamped into `limits`.
    pub fn new(limits: &ZoomLimits) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: limits.clamp(1.0),
        }
    }
}

/// One published metrics reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricsSample {
    pub fps: f32,
    /// Most recent inter-sample delta (the sampler's tick period).
    pub frame_time_ms: f32,
    pub cpu_percent: f32,
}

/// Pointer buttons the viewer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Input events after mapping from the terminal backend.
///
/// Pointer coordinates are canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    PointerDown { button: PointerButton, x: f32, y: f32 },
    PointerUp { button: PointerButton, x: f32, y: f32 },
    PointerMoved { x: f32, y: f32 },
    /// Positive delta zooms in.
    Wheel { delta: f32, x: f32, y: f32 },
    ToggleOverlay,
    Quit,
    Resized { width: u16, height: u16 },
}
