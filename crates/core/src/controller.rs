//! Input controller - turns `ViewEvent`s into camera updates.
//!
//! Owns the transient drag state and the overlay visibility flag. The camera
//! itself stays with the caller and is threaded through [`ViewController::handle`].

use crate::camera::{pan, zoom_at};
use crate::projection::CanvasSize;
use crate::types::{Camera, PointerButton, ViewEvent, ZoomLimits};

/// Button that drags the camera.
pub const DRAG_BUTTON: PointerButton = PointerButton::Middle;

/// What the frame loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Drag-to-pan tracking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    active: bool,
    last_pointer: (f32, f32),
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.active = true;
        self.last_pointer = (x, y);
    }

    /// Delta since the last pointer position, or `None` when not dragging.
    pub fn update(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active {
            return None;
        }
        let (lx, ly) = self.last_pointer;
        self.last_pointer = (x, y);
        Some((x - lx, y - ly))
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone)]
pub struct ViewController {
    limits: ZoomLimits,
    base_tile: u32,
    drag: DragState,
    overlay_visible: bool,
}

impl ViewController {
    pub fn new(limits: ZoomLimits, base_tile: u32) -> Self {
        Self {
            limits,
            base_tile,
            drag: DragState::default(),
            overlay_visible: false,
        }
    }

    pub fn limits(&self) -> &ZoomLimits {
        &self.limits
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn handle(
        &mut self,
        camera: Camera,
        event: ViewEvent,
        canvas: CanvasSize,
    ) -> (Camera, Control) {
        match event {
            ViewEvent::PointerDown { button, x, y } => {
                if button == DRAG_BUTTON && x.is_finite() && y.is_finite() {
                    self.drag.begin(x, y);
                }
                (camera, Control::Continue)
            }
            ViewEvent::PointerUp { button, .. } => {
                if button == DRAG_BUTTON {
                    self.drag.end();
                }
                (camera, Control::Continue)
            }
            ViewEvent::PointerMoved { x, y } => {
                if !x.is_finite() || !y.is_finite() {
                    return (camera, Control::Continue);
                }
                match self.drag.update(x, y) {
                    Some((dx, dy)) => (pan(camera, dx, dy), Control::Continue),
                    None => (camera, Control::Continue),
                }
            }
            ViewEvent::Wheel { delta, x, y } => {
                let camera = zoom_at(camera, delta, (x, y), &self.limits, self.base_tile, canvas);
                (camera, Control::Continue)
            }
            ViewEvent::ToggleOverlay => {
                self.overlay_visible = !self.overlay_visible;
                (camera, Control::Continue)
            }
            ViewEvent::Quit => (camera, Control::Quit),
            ViewEvent::Resized { .. } => (camera, Control::Continue),
        }
    }
}
