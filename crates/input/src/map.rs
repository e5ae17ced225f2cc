//! Event mapping from terminal events to view events.

use crate::types::{PointerButton, ViewEvent};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Canvas pixels per terminal row (upper and lower half block).
const PIXELS_PER_ROW: f32 = 2.0;

/// Convert a terminal cell position to canvas pixels.
pub fn cell_to_canvas(column: u16, row: u16) -> (f32, f32) {
    (column as f32, row as f32 * PIXELS_PER_ROW)
}

/// Map any terminal event. Key releases and repeats are dropped.
pub fn map_event(event: &Event) -> Option<ViewEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        Event::Resize(width, height) => Some(ViewEvent::Resized {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Map keyboard input to view events.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewEvent> {
    if should_quit(key) {
        return Some(ViewEvent::Quit);
    }
    match key.code {
        KeyCode::F(3) => Some(ViewEvent::ToggleOverlay),
        _ => None,
    }
}

/// Map mouse input to view events.
///
/// Terminals report motion with a button held as `Drag`; both that and plain
/// motion become `PointerMoved`, the controller decides whether it pans.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<ViewEvent> {
    let (x, y) = cell_to_canvas(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(button) => Some(ViewEvent::PointerDown {
            button: pointer_button(button),
            x,
            y,
        }),
        MouseEventKind::Up(button) => Some(ViewEvent::PointerUp {
            button: pointer_button(button),
            x,
            y,
        }),
        MouseEventKind::Drag(_) | MouseEventKind::Moved => Some(ViewEvent::PointerMoved { x, y }),
        MouseEventKind::ScrollUp => Some(ViewEvent::Wheel { delta: 1.0, x, y }),
        MouseEventKind::ScrollDown => Some(ViewEvent::Wheel { delta: -1.0, x, y }),
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_overlay_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::F(3))),
            Some(ViewEvent::ToggleOverlay)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::F(4))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(ViewEvent::Quit)
        );
    }

    #[test]
    fn test_middle_button_maps_to_canvas_pixels() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Middle), 7, 5)),
            Some(ViewEvent::PointerDown {
                button: PointerButton::Middle,
                x: 7.0,
                y: 10.0
            })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Middle), 9, 6)),
            Some(ViewEvent::PointerMoved { x: 9.0, y: 12.0 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Middle), 9, 6)),
            Some(ViewEvent::PointerUp {
                button: PointerButton::Middle,
                x: 9.0,
                y: 12.0
            })
        );
    }

    #[test]
    fn test_scroll_maps_to_wheel() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollUp, 1, 1)),
            Some(ViewEvent::Wheel {
                delta: 1.0,
                x: 1.0,
                y: 2.0
            })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollDown, 0, 0)),
            Some(ViewEvent::Wheel {
                delta: -1.0,
                x: 0.0,
                y: 0.0
            })
        );
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::ScrollLeft, 0, 0)), None);
    }

    #[test]
    fn test_map_event_drops_key_release() {
        let release = KeyEvent {
            code: KeyCode::F(3),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(&Event::Key(release)), None);
        assert_eq!(
            map_event(&Event::Key(KeyEvent::from(KeyCode::F(3)))),
            Some(ViewEvent::ToggleOverlay)
        );
        assert_eq!(
            map_event(&Event::Resize(120, 40)),
            Some(ViewEvent::Resized {
                width: 120,
                height: 40
            })
        );
    }
}
