use glam::Vec2;

use crate::options::PickOptions;
use crate::skeleton::{set_screen, to_screen, BoneTree, EffectorIndex};

/// What the pointer is currently dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grab {
    /// The effector at this position in the [`EffectorIndex`].
    Effector(usize),
    /// The root bone.
    Root,
}

/// Hit-tests pointer presses and applies drags to solver goals.
///
/// Effectors are tested before the root, in index order, and the first one
/// in range wins even if a later one is closer.
#[derive(Debug, Clone)]
pub struct PickController {
    grab: Option<Grab>,
    radius_squared: f32,
}

impl PickController {
    /// Create a controller with nothing grabbed.
    #[must_use]
    pub fn new(options: &PickOptions) -> Self {
        Self {
            grab: None,
            radius_squared: options.radius_squared,
        }
    }

    /// Current drag target.
    #[must_use]
    pub const fn grab(&self) -> Option<Grab> {
        self.grab
    }

    /// Squared pick radius in pixels².
    #[must_use]
    pub const fn radius_squared(&self) -> f32 {
        self.radius_squared
    }

    /// Pointer pressed at `(x, y)`.
    ///
    /// Grabs the first effector or, failing that, the root within range and
    /// snaps it under the pointer. Returns `false` and leaves the grab state
    /// untouched when nothing is in range.
    pub fn on_pointer_down(
        &mut self,
        tree: &mut BoneTree,
        effectors: &EffectorIndex,
        x: i32,
        y: i32,
    ) -> bool {
        let pointer = pointer(x, y);

        let hit = effectors.iter().position(|bone| {
            tree.effector(bone).is_some_and(|e| {
                self.in_range(to_screen(e.target_position), pointer)
            })
        });
        if let Some(i) = hit {
            log::debug!("grabbed effector {i} at ({x}, {y})");
            self.grab = Some(Grab::Effector(i));
            self.drag_to(tree, effectors, pointer);
            return true;
        }

        if self.in_range(to_screen(tree.root_bone().local_position), pointer) {
            log::debug!("grabbed root at ({x}, {y})");
            self.grab = Some(Grab::Root);
            self.drag_to(tree, effectors, pointer);
            return true;
        }

        false
    }

    /// Pointer released. Always clears the grab.
    pub fn on_pointer_up(&mut self) {
        if let Some(grab) = self.grab.take() {
            log::debug!("released {grab:?}");
        }
    }

    /// Pointer moved to `(x, y)`. Drags the grabbed target, if any.
    pub fn on_pointer_move(
        &mut self,
        tree: &mut BoneTree,
        effectors: &EffectorIndex,
        x: i32,
        y: i32,
    ) {
        self.drag_to(tree, effectors, pointer(x, y));
    }

    fn in_range(&self, target: Vec2, pointer: Vec2) -> bool {
        target.distance_squared(pointer) < self.radius_squared
    }

    fn drag_to(
        &self,
        tree: &mut BoneTree,
        effectors: &EffectorIndex,
        pointer: Vec2,
    ) {
        match self.grab {
            Some(Grab::Effector(i)) => {
                if let Some(e) =
                    effectors.get(i).and_then(|bone| tree.effector_mut(bone))
                {
                    set_screen(&mut e.target_position, pointer);
                }
            }
            Some(Grab::Root) => {
                set_screen(&mut tree.root_bone_mut().local_position, pointer);
            }
            None => {}
        }
    }
}

fn pointer(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32, y as f32)
}
