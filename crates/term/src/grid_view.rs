//! GridView: maps camera state and the latest metrics into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::PixelCanvas;
use crate::core::{tiles, CanvasSize, Projection};
use crate::fb::{FrameBuffer, Rgb};
use crate::types::{Camera, GridSize, MetricsSample, OUTLINE_WIDTH};

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Pixel size of the canvas behind this viewport.
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.width as f32, self.height as f32 * 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub tile: Rgb,
    pub border: Rgb,
    pub overlay_text: Rgb,
    /// Opacity of the black panel behind the overlay text.
    pub overlay_alpha: u8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(135, 206, 235),
            tile: Rgb::new(34, 139, 34),
            border: Rgb::new(10, 10, 10),
            overlay_text: Rgb::new(255, 255, 255),
            overlay_alpha: 150,
        }
    }
}

/// Overlay panel placement, in cells.
const OVERLAY_X: u16 = 1;
const OVERLAY_Y: u16 = 1;
const OVERLAY_W: u16 = 26;
const OVERLAY_H: u16 = 5;

/// Overlay lines for a sample.
pub fn overlay_lines(sample: &MetricsSample) -> [String; 3] {
    [
        format!("FPS: {:.2}", sample.fps),
        format!("Tick Period: {:.2} ms", sample.frame_time_ms),
        format!("CPU Usage: {:.3}%", sample.cpu_percent),
    ]
}

/// Renders the isometric grid and the metrics overlay.
pub struct GridView {
    grid: GridSize,
    base_tile: u32,
    palette: Palette,
}

impl GridView {
    pub fn new(grid: GridSize, base_tile: u32) -> Self {
        Self {
            grid,
            base_tile,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render one frame into reusable buffers.
    ///
    /// This is the hot path: callers keep one canvas and one framebuffer alive
    /// across frames and both are only reallocated when the viewport grows.
    pub fn render_into(
        &self,
        camera: &Camera,
        overlay: Option<&MetricsSample>,
        viewport: Viewport,
        canvas: &mut PixelCanvas,
        fb: &mut FrameBuffer,
    ) {
        canvas.resize(viewport.width, viewport.height.saturating_mul(2));
        self.draw_grid(camera, canvas);
        canvas.blit_half_blocks(fb);
        if let Some(sample) = overlay {
            self.draw_overlay(fb, sample);
        }
    }

    /// Convenience helper that allocates new buffers.
    pub fn render(
        &self,
        camera: &Camera,
        overlay: Option<&MetricsSample>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut canvas = PixelCanvas::for_cells(viewport.width, viewport.height);
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(camera, overlay, viewport, &mut canvas, &mut fb);
        fb
    }

    /// Clear to the background and draw every tile, `x` outer, `y` inner.
    pub fn draw_grid(&self, camera: &Camera, canvas: &mut PixelCanvas) {
        canvas.clear(self.palette.background);
        let size = CanvasSize::new(canvas.width() as f32, canvas.height() as f32);
        let projection = Projection::new(camera, self.base_tile, size);
        for (x, y) in tiles(self.grid) {
            let points = projection.tile_diamond(x, y).points();
            canvas.fill_convex(&points, self.palette.tile);
            canvas.stroke_closed(&points, OUTLINE_WIDTH, self.palette.border);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, sample: &MetricsSample) {
        fb.shade_rect(OVERLAY_X, OVERLAY_Y, OVERLAY_W, OVERLAY_H, self.palette.overlay_alpha);
        for (i, line) in overlay_lines(sample).iter().enumerate() {
            fb.put_str_over(
                OVERLAY_X + 1,
                OVERLAY_Y + 1 + i as u16,
                line,
                self.palette.overlay_text,
                true,
            );
        }
    }
}
