use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Render", inline)]
#[serde(default)]
/// Marker sizes and label layout for the hierarchy overlay.
pub struct RenderOptions {
    /// Radius of bone joint markers in pixels.
    #[schemars(title = "Bone Radius", range(min = 1.0, max = 20.0), extend("step" = 1.0))]
    pub bone_radius: f32,
    /// Radius of effector markers in pixels.
    #[schemars(title = "Effector Radius", range(min = 1.0, max = 20.0), extend("step" = 1.0))]
    pub effector_radius: f32,
    /// Length of the effector orientation tick in pixels.
    #[schemars(title = "Direction Length", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub direction_length: f32,
    /// Number of segments used when tessellating circle outlines.
    #[schemars(skip)]
    pub circle_segments: u32,
    /// Top-left position of the first status label.
    #[schemars(skip)]
    pub label_origin: [f32; 2],
    /// Vertical distance between consecutive status labels.
    #[schemars(skip)]
    pub label_spacing: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bone_radius: 4.0,
            effector_radius: 5.0,
            direction_length: 20.0,
            circle_segments: 16,
            label_origin: [10.0, 10.0],
            label_spacing: 32.0,
        }
    }
}
