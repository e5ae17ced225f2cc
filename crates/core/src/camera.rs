//! Camera module - pan and zoom-at-cursor
//!
//! Both operations are pure: they take a `Camera` by value and return the
//! updated one. Non-finite inputs leave the camera unchanged.

use crate::projection::{tile_size, CanvasSize, Projection};
use crate::types::{Camera, ZoomLimits};

/// Translate the camera by a canvas-space delta.
pub fn pan(camera: Camera, dx: f32, dy: f32) -> Camera {
    if !dx.is_finite() || !dy.is_finite() {
        return camera;
    }
    Camera {
        offset_x: camera.offset_x + dx,
        offset_y: camera.offset_y + dy,
        ..camera
    }
}

/// Apply `wheel_delta` steps of zoom, keeping the point under `cursor` fixed.
///
/// The pivot is the projected grid origin, and the scale factor is taken from
/// the rounded tile sizes actually drawn, so the grid point under the cursor
/// re-projects onto the cursor after the change.
pub fn zoom_at(
    camera: Camera,
    wheel_delta: f32,
    cursor: (f32, f32),
    limits: &ZoomLimits,
    base_tile: u32,
    canvas: CanvasSize,
) -> Camera {
    let (cx, cy) = cursor;
    if !wheel_delta.is_finite() || !cx.is_finite() || !cy.is_finite() {
        return camera;
    }

    let old_zoom = limits.clamp(camera.zoom);
    let new_zoom = limits.clamp(old_zoom + wheel_delta * limits.step);

    let before = Camera {
        zoom: old_zoom,
        ..camera
    };
    let (origin_x, origin_y) = Projection::new(&before, base_tile, canvas).origin();

    let old_scale = tile_size(base_tile, old_zoom) as f32;
    let new_scale = tile_size(base_tile, new_zoom) as f32;
    let factor = new_scale / old_scale;

    Camera {
        offset_x: camera.offset_x - (cx - origin_x) * (factor - 1.0),
        offset_y: camera.offset_y - (cy - origin_y) * (factor - 1.0),
        zoom: new_zoom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: u32 = 60;

    fn canvas() -> CanvasSize {
        CanvasSize::new(1920.0, 1080.0)
    }

    fn limits() -> ZoomLimits {
        ZoomLimits::new(0.1, 5.0, 0.1)
    }

    #[test]
    fn pan_shifts_projection_exactly() {
        let cam = Camera::new(&limits());
        let moved = pan(cam, 17.0, -9.0);
        let a = Projection::new(&cam, BASE, canvas()).grid_to_screen(4, 9);
        let b = Projection::new(&moved, BASE, canvas()).grid_to_screen(4, 9);
        assert_eq!((b.0 - a.0, b.1 - a.1), (17.0, -9.0));
    }

    #[test]
    fn pan_ignores_non_finite_deltas() {
        let cam = Camera::new(&limits());
        assert_eq!(pan(cam, f32::NAN, 1.0), cam);
        assert_eq!(pan(cam, 1.0, f32::INFINITY), cam);
    }

    #[test]
    fn zoom_is_clamped_to_limits() {
        let lim = limits();
        let mut cam = Camera::new(&lim);
        for _ in 0..100 {
            cam = zoom_at(cam, 1.0, (300.0, 200.0), &lim, BASE, canvas());
        }
        assert_eq!(cam.zoom, lim.max);
        for _ in 0..100 {
            cam = zoom_at(cam, -3.0, (300.0, 200.0), &lim, BASE, canvas());
        }
        assert_eq!(cam.zoom, lim.min);
    }

    #[test]
    fn zoom_keeps_world_point_under_cursor() {
        let lim = limits();
        let cam = Camera {
            offset_x: -140.0,
            offset_y: 35.0,
            zoom: 1.0,
        };
        let cursor = (1234.0, 777.0);
        let world = Projection::new(&cam, BASE, canvas()).screen_to_grid(cursor.0, cursor.1);

        let zoomed = zoom_at(cam, 1.0, cursor, &lim, BASE, canvas());
        assert!(zoomed.zoom > cam.zoom);

        let (sx, sy) = Projection::new(&zoomed, BASE, canvas()).world_to_screen(world.0, world.1);
        assert!((sx - cursor.0).abs() <= 1.0, "x drift {}", sx - cursor.0);
        assert!((sy - cursor.1).abs() <= 1.0, "y drift {}", sy - cursor.1);
    }

    #[test]
    fn zoom_at_bound_leaves_offset_unchanged() {
        let lim = limits();
        let cam = Camera {
            offset_x: 10.0,
            offset_y: 20.0,
            zoom: lim.max,
        };
        let zoomed = zoom_at(cam, 1.0, (50.0, 60.0), &lim, BASE, canvas());
        assert_eq!(zoomed, cam);
    }

    #[test]
    fn zoom_ignores_malformed_cursor() {
        let lim = limits();
        let cam = Camera::new(&lim);
        assert_eq!(zoom_at(cam, 1.0, (f32::NAN, 0.0), &lim, BASE, canvas()), cam);
    }
}
