//! Combat domain: combo tuning.

use serde::{Deserialize, Serialize};

/// Length of the attack chain. Presses past the last step are ignored.
pub const MAX_COMBO_STEPS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboTuning {
    /// Seconds without a press before an active combo drops back to idle.
    pub reset_time: f32,
}

impl Default for ComboTuning {
    fn default() -> Self {
        Self { reset_time: 1.0 }
    }
}
