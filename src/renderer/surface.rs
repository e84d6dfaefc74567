use glam::Vec2;

/// Linear RGB color, components in `0..=1`.
pub type Color = [f32; 3];

/// A drawable target for the editor overlay.
///
/// Implementations receive primitives in painter's order. Circles are
/// outlines; text layout and rasterization are up to the implementation.
pub trait Surface {
    /// Outline a circle.
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw a one-pixel line segment.
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);

    /// Draw a line of text with its top-left corner at `origin`.
    fn label(&mut self, origin: Vec2, text: &str, color: Color);
}
