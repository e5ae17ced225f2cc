//! Projection module - isometric grid to canvas transform
//!
//! Grid cell `(x, y)` is placed at
//!
//! ```text
//! screen_x = (x - y) * tile_size / 2 + canvas_width  / 2 + offset_x
//! screen_y = (x + y) * tile_size / 4 + canvas_height / 8 + offset_y
//! ```
//!
//! where `tile_size` is the base tile size scaled by zoom and rounded. Tiles are
//! diamonds centered on that point, `tile_size` wide and `tile_size / 2` tall,
//! so neighbouring diamonds share edges and never overlap.

use crate::types::{Camera, GridSize, MIN_TILE_PX};

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Effective tile width in pixels for a base size and zoom.
#[inline]
pub fn tile_size(base: u32, zoom: f32) -> i32 {
    let scaled = (base as f32 * zoom).round();
    if !scaled.is_finite() {
        return MIN_TILE_PX;
    }
    (scaled as i32).max(MIN_TILE_PX)
}

/// Grid cells in draw order: `x` outer, `y` inner.
pub fn tiles(grid: GridSize) -> impl Iterator<Item = (u32, u32)> {
    (0..grid.width).flat_map(move |x| (0..grid.height).map(move |y| (x, y)))
}

/// A tile polygon in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diamond {
    pub center: (f32, f32),
    pub half_w: f32,
    pub half_h: f32,
}

impl Diamond {
    /// Vertices in order: top, right, bottom, left.
    pub fn points(&self) -> [(f32, f32); 4] {
        let (cx, cy) = self.center;
        [
            (cx, cy - self.half_h),
            (cx + self.half_w, cy),
            (cx, cy + self.half_h),
            (cx - self.half_w, cy),
        ]
    }

    pub fn area(&self) -> f32 {
        2.0 * self.half_w * self.half_h
    }
}

/// Projection for one frame. Cheap to build; rebuild whenever the camera changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    tile_size: i32,
    origin_x: f32,
    origin_y: f32,
}

impl Projection {
    pub fn new(camera: &Camera, base_tile: u32, canvas: CanvasSize) -> Self {
        Self {
            tile_size: tile_size(base_tile, camera.zoom),
            origin_x: canvas.width / 2.0 + camera.offset_x,
            origin_y: canvas.height / 8.0 + camera.offset_y,
        }
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Canvas position of grid cell `(0, 0)`.
    pub fn origin(&self) -> (f32, f32) {
        (self.origin_x, self.origin_y)
    }

    #[inline]
    pub fn grid_to_screen(&self, x: u32, y: u32) -> (f32, f32) {
        self.world_to_screen(x as f32, y as f32)
    }

    /// Like [`Projection::grid_to_screen`] for fractional grid coordinates.
    #[inline]
    pub fn world_to_screen(&self, gx: f32, gy: f32) -> (f32, f32) {
        let ts = self.tile_size as f32;
        (
            (gx - gy) * ts / 2.0 + self.origin_x,
            (gx + gy) * ts / 4.0 + self.origin_y,
        )
    }

    /// Inverse of [`Projection::world_to_screen`].
    pub fn screen_to_grid(&self, sx: f32, sy: f32) -> (f32, f32) {
        let ts = self.tile_size as f32;
        let diff = (sx - self.origin_x) / (ts / 2.0);
        let sum = (sy - self.origin_y) / (ts / 4.0);
        ((sum + diff) / 2.0, (sum - diff) / 2.0)
    }

    #[inline]
    pub fn tile_diamond(&self, x: u32, y: u32) -> Diamond {
        let ts = self.tile_size as f32;
        Diamond {
            center: self.grid_to_screen(x, y),
            half_w: ts / 2.0,
            half_h: ts / 4.0,
        }
    }
}
