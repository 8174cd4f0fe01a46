//! Movement domain: tuning, input and camera resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::integrator::SpeedTier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub sprint_speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
    /// Downward velocity held while grounded so the body stays seated.
    pub ground_stick_velocity: f32,
    /// Orientation blend factor per second.
    pub turn_rate: f32,
    /// Extra ray length below the feet when probing for ground.
    pub ground_probe: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 4.5,
            run_speed: 7.5,
            sprint_speed: 10.0,
            jump_force: 7.0,
            gravity: 9.81,
            ground_stick_velocity: -2.0,
            turn_rate: 10.0,
            ground_probe: 0.15,
        }
    }
}

impl MovementTuning {
    pub fn speed_for(&self, tier: SpeedTier) -> f32 {
        match tier {
            SpeedTier::Walk => self.walk_speed,
            SpeedTier::Run => self.run_speed,
            SpeedTier::Sprint => self.sprint_speed,
        }
    }
}

/// How a jump press turns into an upward impulse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum JumpMode {
    /// Input is consumed immediately, the impulse lands `windup` seconds later.
    /// Ground reset and new jumps stay suppressed for `liftoff` seconds after it.
    Windup { windup: f32, liftoff: f32 },
    /// Impulse on the press tick, with an optional single air jump.
    Instant { double_jump: bool },
}

impl JumpMode {
    pub const fn windup() -> Self {
        Self::Windup {
            windup: 0.3,
            liftoff: 0.3,
        }
    }

    pub const fn instant() -> Self {
        Self::Instant { double_jump: true }
    }
}

/// Interpolation used when turning toward the move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrientationBlend {
    Spherical,
    Linear,
}

/// One tick of movement intent, produced by the input collaborator.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    pub horizontal: f32,
    pub vertical: f32,
    pub run_held: bool,
    /// Sprint modifier; only counts while run is also held.
    pub sprint_held: bool,
    pub jump_pressed: bool,
    pub attack_pressed: bool,
}

impl InputSample {
    pub fn speed_tier(&self) -> SpeedTier {
        SpeedTier::from_modifiers(self.run_held, self.sprint_held)
    }

    pub fn has_direction(&self) -> bool {
        self.horizontal != 0.0 || self.vertical != 0.0
    }
}

/// Camera forward/right flattened onto the horizontal plane.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

impl CameraBasis {
    /// Drops the vertical component of both axes and renormalizes.
    /// An axis pointing straight up or down collapses to zero.
    pub fn from_view(forward: Vec3, right: Vec3) -> Self {
        Self {
            forward: flatten(forward),
            right: flatten(right),
        }
    }
}

fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

/// Source of the camera basis for hosts that own their collaborators.
pub trait CameraProvider {
    fn basis(&self) -> CameraBasis;
}

impl CameraProvider for CameraBasis {
    fn basis(&self) -> CameraBasis {
        *self
    }
}
