use glam::Vec2;

use super::surface::{Color, Surface};

/// A single recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Circle outline.
    Circle {
        /// Center in screen pixels.
        center: Vec2,
        /// Radius in pixels.
        radius: f32,
        /// Outline color.
        color: Color,
    },
    /// Line segment.
    Line {
        /// Start point in screen pixels.
        from: Vec2,
        /// End point in screen pixels.
        to: Vec2,
        /// Line color.
        color: Color,
    },
    /// Text label.
    Label {
        /// Top-left corner in screen pixels.
        origin: Vec2,
        /// Text to draw.
        text: String,
        /// Text color.
        color: Color,
    },
}

/// A [`Surface`] that records primitives instead of drawing them.
///
/// Backends replay the list (or [`tessellate`](super::tessellate) it);
/// tests inspect it directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded primitives in draw order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded primitives, keeping the allocation for the next
    /// frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Circle centers in draw order.
    pub fn circle_centers(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, .. } => Some(*center),
            _ => None,
        })
    }

    /// Line endpoints in draw order.
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    /// Label texts in draw order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn label(&mut self, origin: Vec2, text: &str, color: Color) {
        self.commands.push(DrawCommand::Label {
            origin,
            text: text.to_owned(),
            color,
        });
    }
}
