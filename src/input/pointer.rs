//! Turns raw cursor/button notifications into [`InputEvent`]s.
//!
//! Window systems report button presses without a position, so the tracker
//! remembers the last cursor position and stamps it onto down events.

use super::event::{InputEvent, MouseButton};

/// Tracks the cursor and primary-button state between window events.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    cursor: (i32, i32),
    pressed: bool,
}

impl PointerTracker {
    /// Create a tracker with the cursor at the origin and nothing pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in pixels.
    #[must_use]
    pub const fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Whether the primary button is currently held.
    #[must_use]
    pub const fn pressed(&self) -> bool {
        self.pressed
    }

    /// Cursor moved to a (possibly fractional) physical position.
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> InputEvent {
        self.cursor = (x as i32, y as i32);
        InputEvent::PointerMove {
            x: self.cursor.0,
            y: self.cursor.1,
        }
    }

    /// Button pressed or released. Only the left button is forwarded.
    pub fn button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }
        self.pressed = pressed;
        Some(if pressed {
            InputEvent::PointerDown {
                x: self.cursor.0,
                y: self.cursor.1,
            }
        } else {
            InputEvent::PointerUp
        })
    }

    /// Translate a winit window event, if it concerns the pointer.
    #[cfg(feature = "viewer")]
    pub fn translate(
        &mut self,
        event: &winit::event::WindowEvent,
    ) -> Option<InputEvent> {
        use winit::event::{ElementState, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.cursor_moved(position.x, position.y))
            }
            WindowEvent::MouseInput { state, button, .. } => self.button(
                MouseButton::from(*button),
                *state == ElementState::Pressed,
            ),
            _ => None,
        }
    }
}
