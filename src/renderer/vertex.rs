//! CPU tessellation of a [`DrawList`](super::DrawList) into a line-list
//! vertex stream ready for GPU upload.

use std::f32::consts::TAU;

use glam::Vec2;

use super::draw_list::DrawCommand;

/// One endpoint of a line-list segment.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// Screen position in pixels.
    pub position: [f32; 2],
    /// Linear RGB color.
    pub color: [f32; 3],
}

impl LineVertex {
    fn new(position: Vec2, color: [f32; 3]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Expand circles and lines into vertex pairs (two vertices per segment).
///
/// Circles become `circle_segments` chords (at least 3). Labels produce no
/// geometry.
#[must_use]
pub fn tessellate(
    commands: &[DrawCommand],
    circle_segments: u32,
) -> Vec<LineVertex> {
    let segments = circle_segments.max(3);
    let mut out = Vec::new();
    for command in commands {
        match command {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                let point = |i: u32| {
                    let angle = TAU * i as f32 / segments as f32;
                    *center + Vec2::from_angle(angle) * *radius
                };
                for i in 0..segments {
                    out.push(LineVertex::new(point(i), *color));
                    out.push(LineVertex::new(point(i + 1), *color));
                }
            }
            DrawCommand::Line { from, to, color } => {
                out.push(LineVertex::new(*from, *color));
                out.push(LineVertex::new(*to, *color));
            }
            DrawCommand::Label { .. } => {}
        }
    }
    out
}

/// View a vertex slice as raw bytes for a vertex buffer upload.
#[must_use]
pub fn as_bytes(vertices: &[LineVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
