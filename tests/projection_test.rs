use iso_grid::core::{tile_size, tiles, CanvasSize, Projection};
use iso_grid::types::{Camera, GridSize, MIN_TILE_PX};

fn camera(offset_x: f32, offset_y: f32, zoom: f32) -> Camera {
    Camera {
        offset_x,
        offset_y,
        zoom,
    }
}

#[test]
fn projection_places_origin_tile_on_canvas() {
    let p = Projection::new(&camera(0.0, 0.0, 1.0), 60, CanvasSize::new(800.0, 600.0));
    assert_eq!(p.tile_size(), 60);
    assert_eq!(p.grid_to_screen(0, 0), (400.0, 75.0));
    assert_eq!(p.grid_to_screen(1, 0), (430.0, 90.0));
    assert_eq!(p.grid_to_screen(0, 1), (370.0, 90.0));
}

#[test]
fn projection_diamond_is_half_as_tall_as_wide() {
    let p = Projection::new(&camera(0.0, 0.0, 1.0), 60, CanvasSize::new(800.0, 600.0));
    let d = p.tile_diamond(0, 0);
    assert_eq!(
        d.points(),
        [(400.0, 60.0), (430.0, 75.0), (400.0, 90.0), (370.0, 75.0)]
    );
}

#[test]
fn projection_offset_translates_every_tile() {
    let canvas = CanvasSize::new(640.0, 480.0);
    let a = Projection::new(&camera(0.0, 0.0, 1.3), 60, canvas);
    let b = Projection::new(&camera(-25.0, 40.0, 1.3), 60, canvas);
    for (x, y) in [(0, 0), (7, 3), (99, 99)] {
        let (ax, ay) = a.grid_to_screen(x, y);
        let (bx, by) = b.grid_to_screen(x, y);
        assert_eq!((bx - ax, by - ay), (-25.0, 40.0));
    }
}

#[test]
fn projection_tile_size_has_floor() {
    assert_eq!(tile_size(60, 0.01), MIN_TILE_PX);
    assert_eq!(tile_size(24, 0.1), MIN_TILE_PX);
    assert_eq!(tile_size(60, 0.5), 30);
    assert_eq!(tile_size(60, 1.25), 75);
}

#[test]
fn projection_round_trips_through_grid_space() {
    let p = Projection::new(&camera(13.0, -7.0, 2.0), 24, CanvasSize::new(300.0, 200.0));
    let (sx, sy) = p.world_to_screen(3.25, 8.5);
    let (gx, gy) = p.screen_to_grid(sx, sy);
    assert!((gx - 3.25).abs() < 1e-4);
    assert!((gy - 8.5).abs() < 1e-4);
}

#[test]
fn tiles_visit_x_outer_y_inner() {
    let order: Vec<_> = tiles(GridSize::new(2, 3)).collect();
    assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
}
