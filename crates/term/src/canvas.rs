//! Pixel canvas and polygon rasterization.
//!
//! The canvas is the terminal's drawing surface at pixel resolution: every
//! terminal cell covers one column and two rows of pixels. Shapes are drawn
//! here and then folded into a [`FrameBuffer`] with upper half blocks
//! (foreground = top pixel, background = bottom pixel).

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Glyph whose foreground paints the top half of the cell.
const UPPER_HALF: char = '▀';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); (width as usize) * (height as usize)],
        }
    }

    /// Canvas covering a framebuffer of `cols` x `rows` cells.
    pub fn for_cells(cols: u16, rows: u16) -> Self {
        Self::new(cols, rows.saturating_mul(2))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels
            .resize((width as usize) * (height as usize), Rgb::default());
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    #[inline(always)]
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Rgb) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width as i32 - 1);
        if x0 > x1 {
            return;
        }
        let row = (y as usize) * (self.width as usize);
        self.pixels[row + x0 as usize..=row + x1 as usize].fill(color);
    }

    /// Fill a convex polygon, sampling at pixel centers.
    pub fn fill_convex(&mut self, points: &[(f32, f32)], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let (min_y, max_y) = points
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.1), hi.max(p.1)));
        let (min_x, max_x) = points
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.0), hi.max(p.0)));
        if !min_y.is_finite() || !max_y.is_finite() || !min_x.is_finite() || !max_x.is_finite() {
            return;
        }
        if max_x < 0.0 || min_x > self.width as f32 || max_y < 0.0 || min_y > self.height as f32 {
            return;
        }

        let y_start = ((min_y - 0.5).ceil() as i32).max(0);
        let y_end = ((max_y - 0.5).floor() as i32).min(self.height as i32 - 1);

        for py in y_start..=y_end {
            let yc = py as f32 + 0.5;
            let mut left = f32::MAX;
            let mut right = f32::MIN;
            for i in 0..points.len() {
                let (x0, y0) = points[i];
                let (x1, y1) = points[(i + 1) % points.len()];
                let crosses = (y0 <= yc && yc < y1) || (y1 <= yc && yc < y0);
                if !crosses {
                    continue;
                }
                let x = x0 + (yc - y0) * (x1 - x0) / (y1 - y0);
                left = left.min(x);
                right = right.max(x);
            }
            if left > right {
                continue;
            }
            let x0 = (left - 0.5).ceil() as i32;
            let x1 = (right - 0.5).floor() as i32;
            self.fill_span(py, x0, x1, color);
        }
    }

    /// Draw a closed outline `width` pixels wide.
    pub fn stroke_closed(&mut self, points: &[(f32, f32)], width: u32, color: Rgb) {
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            self.stroke_segment(a, b, width, color);
        }
    }

    /// Bresenham line stamped with a square brush.
    ///
    /// The segment is clipped to the canvas (plus the brush margin) first, so
    /// the walk never visits more than a canvas diagonal of pixels.
    pub fn stroke_segment(&mut self, a: (f32, f32), b: (f32, f32), width: u32, color: Rgb) {
        if !(a.0.is_finite() && a.1.is_finite() && b.0.is_finite() && b.1.is_finite()) {
            return;
        }
        let w = width.max(1) as i32;
        let lo = -(w / 2);
        let hi = lo + w - 1;

        let margin = f64::from(w + 1);
        let min = (-margin, -margin);
        let max = (
            f64::from(self.width) - 1.0 + margin,
            f64::from(self.height) - 1.0 + margin,
        );
        let Some((a, b)) = clip_segment(a, b, min, max) else {
            return;
        };

        let (mut x0, mut y0) = (a.0.round() as i32, a.1.round() as i32);
        let (x1, y1) = (b.0.round() as i32, b.1.round() as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            for oy in lo..=hi {
                self.fill_span(y0 + oy, x0 + lo, x0 + hi, color);
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Fold pixel rows pairwise into half-block cells.
    ///
    /// The framebuffer is resized to `width` x `ceil(height / 2)`.
    pub fn blit_half_blocks(&self, fb: &mut FrameBuffer) {
        let rows = self.height.div_ceil(2);
        fb.resize(self.width, rows);
        for row in 0..rows {
            let top_y = (row as i32) * 2;
            for x in 0..self.width {
                let top = self.get(x as i32, top_y).unwrap_or_default();
                let bottom = self.get(x as i32, top_y + 1).unwrap_or(top);
                fb.set(
                    x,
                    row,
                    Cell {
                        ch: UPPER_HALF,
                        style: CellStyle {
                            fg: top,
                            bg: bottom,
                            bold: false,
                        },
                    },
                );
            }
        }
    }
}

/// Liang-Barsky clip of `a`-`b` to the box `min..=max`.
///
/// Runs in `f64` so that far-away endpoints still land on the right pixel.
fn clip_segment(
    a: (f32, f32),
    b: (f32, f32),
    min: (f64, f64),
    max: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (ax, ay) = (f64::from(a.0), f64::from(a.1));
    let (dx, dy) = (f64::from(b.0) - ax, f64::from(b.1) - ay);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, ax - min.0),
        (dx, max.0 - ax),
        (-dy, ay - min.1),
        (dy, max.1 - ay),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some(((ax + t0 * dx, ay + t0 * dy), (ax + t1 * dx, ay + t1 * dy)))
}
