//! The editor session: owns the bone tree and drives one frame at a time.
//!
//! Each frame runs three phases in a fixed order: input handling
//! ([`Updateable::process_event`]), solving ([`Updateable::update`]) and
//! drawing ([`Updateable::draw`]). [`EditorSession::frame`] runs them in
//! that order for callers that batch their events.

mod accessors;
mod construction;
mod input;

pub use construction::StatusLabels;

use crate::input::InputEvent;
use crate::options::Options;
use crate::picking::PickController;
use crate::renderer::{HierarchyRenderer, Surface};
use crate::skeleton::{BoneTree, EffectorIndex};
use crate::solver::Solver;

/// Something driven by the frame loop.
pub trait Updateable {
    /// Advance one simulation tick.
    fn update(&mut self, time_step: f32);

    /// Draw the current state.
    fn draw(&self, surface: &mut dyn Surface);

    /// Handle an input event. Returns `true` when the event was consumed
    /// and should not be propagated further.
    fn process_event(&mut self, event: InputEvent) -> bool;
}

/// An interactive editing session over a single bone tree.
///
/// The effector index is collected once at construction; the tree's shape
/// is assumed fixed afterwards.
pub struct EditorSession {
    tree: BoneTree,
    effectors: EffectorIndex,
    picker: PickController,
    renderer: HierarchyRenderer,
    solver: Box<dyn Solver>,
    labels: StatusLabels,
    options: Options,
}

impl Updateable for EditorSession {
    fn update(&mut self, _time_step: f32) {
        self.solver.solve(&mut self.tree);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.renderer.draw_tree(&self.tree, surface);
        self.renderer
            .draw_effectors(&self.tree, &self.effectors, surface);
        self.renderer.draw_labels(self.labels.iter(), surface);
    }

    fn process_event(&mut self, event: InputEvent) -> bool {
        self.dispatch(event)
    }
}

impl EditorSession {
    /// Run one full frame: all `events`, then one solve, then draw.
    ///
    /// Returns how many events were consumed.
    pub fn frame(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
        time_step: f32,
        surface: &mut dyn Surface,
    ) -> usize {
        let consumed = events
            .into_iter()
            .filter(|&event| self.process_event(event))
            .count();
        self.update(time_step);
        self.draw(surface);
        consumed
    }
}
