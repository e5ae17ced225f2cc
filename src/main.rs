//! Isometric grid viewer (default binary).
//!
//! Draws a pan/zoomable isometric grid full-screen in the terminal.
//! Middle-drag pans, the wheel zooms around the pointer, F3 toggles the
//! metrics overlay and Esc quits.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use tracing::{debug, info};

use iso_grid::config::ViewerConfig;
use iso_grid::core::{Control, ViewController};
use iso_grid::input::map_event;
use iso_grid::logging;
use iso_grid::metrics::{spawn_sampler, ProcessCpuProbe, SampleFeed, SamplerConfig};
use iso_grid::term::{FrameBuffer, FrameLimiter, GridView, PixelCanvas, TerminalRenderer, Viewport};
use iso_grid::types::{Camera, ViewEvent};

fn main() -> Result<()> {
    let config = ViewerConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    info!(
        preset = ?config.preset,
        grid_width = config.grid.width,
        grid_height = config.grid.height,
        base_tile = config.base_tile,
        min_zoom = config.zoom.min,
        max_zoom = config.zoom.max,
        target_fps = config.target_fps,
        "starting viewer"
    );

    let mut feed = spawn_sampler(
        ProcessCpuProbe::new(),
        SamplerConfig::for_fps(config.target_fps),
    )?;

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e);
    }

    let result = run(&mut term, &config, &mut feed);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(ok = result.is_ok(), "viewer stopped");
    result
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, config: &ViewerConfig, feed: &mut SampleFeed) -> Result<()> {
    let view = GridView::new(config.grid, config.base_tile);
    let mut controller = ViewController::new(config.zoom, config.base_tile);
    let mut camera = Camera::new(&config.zoom);
    let limiter = FrameLimiter::new(config.target_fps);

    let mut viewport = current_viewport();
    let mut canvas = PixelCanvas::for_cells(viewport.width, viewport.height);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    loop {
        let frame_start = Instant::now();

        // Input.
        while event::poll(Duration::ZERO)? {
            let Some(ev) = map_event(&event::read()?) else {
                continue;
            };
            if let ViewEvent::Resized { width, height } = ev {
                debug!(width, height, "terminal resized");
                viewport = Viewport::new(width, height);
                term.invalidate();
            }
            let (next, control) = controller.handle(camera, ev, viewport.canvas_size());
            camera = next;
            if control == Control::Quit {
                return Ok(());
            }
        }

        // Render.
        let latest = feed.latest();
        let overlay = latest.as_ref().filter(|_| controller.overlay_visible());
        view.render_into(&camera, overlay, viewport, &mut canvas, &mut fb);
        term.present(&mut fb)?;

        if let Some(rest) = limiter.remaining(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
