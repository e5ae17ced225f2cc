use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iso_grid::core::{CanvasSize, ViewController};
use iso_grid::metrics::MetricsSampler;
use iso_grid::term::{encode_diff_into, FrameBuffer, GridView, PixelCanvas, Viewport};
use iso_grid::types::{Camera, GridSize, MetricsSample, ViewEvent, ZoomLimits};

fn limits() -> ZoomLimits {
    ZoomLimits::new(0.1, 5.0, 0.1)
}

fn bench_full_grid(c: &mut Criterion) {
    let view = GridView::new(GridSize::new(100, 100), 24);
    let camera = Camera::new(&limits());
    let vp = Viewport::new(200, 60);
    let mut canvas = PixelCanvas::for_cells(vp.width, vp.height);
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    let sample = MetricsSample {
        fps: 60.0,
        frame_time_ms: 16.7,
        cpu_percent: 1.25,
    };

    c.bench_function("render_100x100_grid", |b| {
        b.iter(|| {
            view.render_into(
                black_box(&camera),
                Some(&sample),
                vp,
                &mut canvas,
                &mut fb,
            );
        })
    });
}

fn bench_encode_diff(c: &mut Criterion) {
    let view = GridView::new(GridSize::new(100, 100), 24);
    let vp = Viewport::new(200, 60);
    let a = view.render(&Camera::new(&limits()), None, vp);
    let panned = Camera {
        offset_x: 3.0,
        ..Camera::new(&limits())
    };
    let b_fb = view.render(&panned, None, vp);
    let mut out = Vec::with_capacity(256 * 1024);

    c.bench_function("encode_pan_diff", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(black_box(&a), black_box(&b_fb), &mut out).unwrap();
        })
    });
}

fn bench_zoom_events(c: &mut Criterion) {
    let mut ctl = ViewController::new(limits(), 24);
    let canvas = CanvasSize::new(200.0, 120.0);

    c.bench_function("wheel_zoom_event", |b| {
        let mut camera = Camera::new(&limits());
        let mut dir = 1.0;
        b.iter(|| {
            let ev = ViewEvent::Wheel {
                delta: dir,
                x: 73.0,
                y: 41.0,
            };
            camera = ctl.handle(camera, black_box(ev), canvas).0;
            if camera.zoom >= 5.0 || camera.zoom <= 0.1 {
                dir = -dir;
            }
        })
    });
}

fn bench_sampler_tick(c: &mut Criterion) {
    let mut sampler = MetricsSampler::new(60.0);

    c.bench_function("sampler_tick", |b| {
        b.iter(|| sampler.tick(black_box(16.6), black_box(3.0)))
    });
}

criterion_group!(
    benches,
    bench_full_grid,
    bench_encode_diff,
    bench_zoom_events,
    bench_sampler_tick
);
criterion_main!(benches);
