//! Pointer dispatch for [`EditorSession`].

use super::EditorSession;
use crate::input::InputEvent;

impl EditorSession {
    /// Route an event to the pick controller. Only a press that grabs
    /// something counts as consumed.
    pub(super) fn dispatch(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => self.picker.on_pointer_down(
                &mut self.tree,
                &self.effectors,
                x,
                y,
            ),
            InputEvent::PointerUp => {
                self.picker.on_pointer_up();
                false
            }
            InputEvent::PointerMove { x, y } => {
                self.picker
                    .on_pointer_move(&mut self.tree, &self.effectors, x, y);
                false
            }
        }
    }

    /// Drop any active grab without a pointer event, e.g. when the window
    /// loses focus mid-drag.
    pub fn release_grab(&mut self) {
        self.picker.on_pointer_up();
    }
}
