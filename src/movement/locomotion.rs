//! Movement domain: the per-tick locomotion step.

use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::integrator::{horizontal_motion, integrate_vertical};
use crate::movement::jump::{self, JumpOutcome};
use crate::movement::orientation::face_toward;
use crate::movement::{
    CameraBasis, InputSample, JumpPhase, MotionState, MovementFlags, PhysicsBody,
};

/// Locomotion state for one character: motion, pending jump phase,
/// orientation and the flags derived from the latest input.
#[derive(Component, Debug, Clone)]
pub struct Locomotion {
    pub motion: MotionState,
    pub jump_phase: JumpPhase,
    pub facing: Quat,
    pub flags: MovementFlags,
    enabled: bool,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self {
            motion: MotionState::default(),
            jump_phase: JumpPhase::Idle,
            facing: Quat::IDENTITY,
            flags: MovementFlags::default(),
            enabled: true,
        }
    }
}

impl Locomotion {
    pub fn with_facing(facing: Quat) -> Self {
        Self {
            facing,
            ..default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling discards a pending windup impulse.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled && self.enabled {
            jump::cancel(&mut self.motion, &mut self.jump_phase);
        }
        self.enabled = enabled;
    }

    /// Runs one tick and returns the velocity passed to `body.move_by`.
    pub fn step<B: PhysicsBody + ?Sized>(
        &mut self,
        input: &InputSample,
        basis: &CameraBasis,
        body: &mut B,
        config: &ControllerConfig,
        dt: f32,
    ) -> Vec3 {
        if !self.enabled {
            return Vec3::ZERO;
        }

        let tuning = &config.movement;
        let horizontal = horizontal_motion(input, basis, tuning.speed_for(input.speed_tier()));

        jump::observe_ground(&mut self.motion, &mut self.jump_phase, body.is_grounded());
        integrate_vertical(&mut self.motion, tuning, dt);
        jump::advance_phase(
            &mut self.motion,
            &mut self.jump_phase,
            config.jump,
            tuning.jump_force,
            dt,
        );
        if input.jump_pressed {
            let outcome = jump::try_jump(
                &mut self.motion,
                &mut self.jump_phase,
                config.jump,
                tuning.jump_force,
            );
            if outcome == JumpOutcome::Ignored {
                debug!("Jump press ignored: phase={:?}", self.jump_phase);
            }
        }

        let velocity = Vec3::new(horizontal.x, self.motion.vertical_velocity, horizontal.z);
        body.move_by(velocity, dt);

        self.facing = face_toward(
            self.facing,
            horizontal,
            config.orientation,
            tuning.turn_rate,
            dt,
        );
        self.flags = MovementFlags::from_input(input);
        velocity
    }
}
