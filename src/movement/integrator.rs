//! Movement domain: camera-relative horizontal motion and vertical integration.

use bevy::prelude::*;

use crate::movement::{CameraBasis, InputSample, MotionState, MovementTuning};

/// Locomotion speed band. Sprint requires run to be held as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SpeedTier {
    #[default]
    Walk,
    Run,
    Sprint,
}

impl SpeedTier {
    pub fn from_modifiers(run_held: bool, sprint_held: bool) -> Self {
        match (run_held, sprint_held) {
            (true, true) => SpeedTier::Sprint,
            (true, false) => SpeedTier::Run,
            _ => SpeedTier::Walk,
        }
    }
}

/// Horizontal velocity for this tick. Zero input (or input that cancels out
/// against the basis) yields exactly `Vec3::ZERO`.
pub fn horizontal_motion(input: &InputSample, basis: &CameraBasis, speed: f32) -> Vec3 {
    if !input.has_direction() {
        return Vec3::ZERO;
    }

    let wish = basis.forward * input.vertical + basis.right * input.horizontal;
    wish.normalize_or_zero() * speed
}

/// Grounded bodies with non-positive velocity are pinned to the stick
/// velocity; airborne bodies fall under explicit Euler gravity.
pub fn integrate_vertical(motion: &mut MotionState, tuning: &MovementTuning, dt: f32) {
    if motion.grounded {
        if motion.vertical_velocity <= 0.0 {
            motion.vertical_velocity = tuning.ground_stick_velocity;
        }
    } else {
        motion.vertical_velocity -= tuning.gravity * dt;
    }
}
