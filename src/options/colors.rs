use serde::{Deserialize, Serialize};

/// Color palette for the editor overlay (linear RGB, 0..1).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Root bone marker and segments. Distinct because the root can't be
    /// deleted.
    pub root: [f32; 3],
    /// Every non-root bone.
    pub bone: [f32; 3],
    /// Effector markers and direction ticks.
    pub effector: [f32; 3],
    /// Status label text.
    pub label: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            root: rgb8(255, 100, 255),
            bone: rgb8(100, 100, 255),
            effector: rgb8(200, 255, 0),
            label: rgb8(255, 255, 255),
        }
    }
}

fn rgb8(r: u8, g: u8, b: u8) -> [f32; 3] {
    [f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0]
}
