/// Platform-agnostic pointer events consumed by the editor.
///
/// Coordinates are integer screen pixels.
///
/// # Example
///
/// ```
/// # use ikedit::InputEvent;
/// let down = InputEvent::PointerDown { x: 50, y: 60 };
/// assert_eq!(down.position(), Some((50, 60)));
/// assert_eq!(InputEvent::PointerUp.position(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Primary button pressed at a screen position.
    PointerDown {
        /// Horizontal position in pixels.
        x: i32,
        /// Vertical position in pixels.
        y: i32,
    },
    /// Primary button released.
    PointerUp,
    /// Cursor moved to an absolute screen position.
    PointerMove {
        /// Horizontal position in pixels.
        x: i32,
        /// Vertical position in pixels.
        y: i32,
    },
}

impl InputEvent {
    /// Screen position carried by the event, if any.
    #[must_use]
    pub const fn position(self) -> Option<(i32, i32)> {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } => {
                Some((x, y))
            }
            Self::PointerUp => None,
        }
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Back, forward and any extra buttons.
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => Self::Other,
        }
    }
}
