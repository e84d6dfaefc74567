use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Solver", inline)]
#[serde(default)]
/// Limits for the bundled CCD solver.
pub struct SolverOptions {
    /// Maximum CCD sweeps per `solve` call.
    #[schemars(title = "Max Iterations", range(min = 1, max = 200))]
    pub max_iterations: u32,
    /// Stop early once every tip is this close to its target (pixels).
    #[schemars(title = "Tolerance", range(min = 0.0, max = 10.0), extend("step" = 0.01))]
    pub tolerance: f32,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            tolerance: 0.01,
        }
    }
}
