use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
/// Pointer hit-testing parameters.
pub struct PickOptions {
    /// Squared pick radius in pixels². A target is hit when the squared
    /// distance to the pointer is strictly below this value.
    #[schemars(title = "Pick Radius²", range(min = 1.0, max = 2500.0), extend("step" = 25.0))]
    pub radius_squared: f32,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            radius_squared: 300.0,
        }
    }
}
