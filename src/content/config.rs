//! Controller configuration and the two product presets.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animation::{SimpleTable, StrafingTable, TransitionTable};
use crate::combat::ComboTuning;
use crate::movement::{JumpMode, MovementTuning, OrientationBlend};

/// Everything a character controller needs, loaded once at startup.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    #[serde(default)]
    pub movement: MovementTuning,
    pub jump: JumpMode,
    pub orientation: OrientationBlend,
    pub animation: TransitionTable,
    /// Attack combo add-on; `None` leaves characters without one.
    #[serde(default)]
    pub combo: Option<ComboTuning>,
}

/// Named presets for the two shipped controller flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Windup jump, run/sprint tiers, directional strafing codes.
    Strafing,
    /// Instant single and double jump with the three-hit combo.
    Brawler,
}

impl ControllerConfig {
    pub fn preset(variant: Variant) -> Self {
        match variant {
            Variant::Strafing => Self {
                movement: MovementTuning::default(),
                jump: JumpMode::windup(),
                orientation: OrientationBlend::Spherical,
                animation: TransitionTable::Strafing(StrafingTable::default()),
                combo: None,
            },
            Variant::Brawler => Self {
                movement: MovementTuning::default(),
                jump: JumpMode::instant(),
                orientation: OrientationBlend::Linear,
                animation: TransitionTable::Simple(SimpleTable::default()),
                combo: Some(ComboTuning::default()),
            },
        }
    }

    /// Returns a description of every out-of-range value.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let m = &self.movement;

        let non_negative = [
            ("movement.walk_speed", m.walk_speed),
            ("movement.run_speed", m.run_speed),
            ("movement.sprint_speed", m.sprint_speed),
            ("movement.jump_force", m.jump_force),
            ("movement.gravity", m.gravity),
            ("movement.turn_rate", m.turn_rate),
            ("movement.ground_probe", m.ground_probe),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                problems.push(format!("{field} must be finite and non-negative, got {value}"));
            }
        }

        if m.walk_speed > m.run_speed || m.run_speed > m.sprint_speed {
            problems.push(format!(
                "speeds must satisfy walk <= run <= sprint, got {} / {} / {}",
                m.walk_speed, m.run_speed, m.sprint_speed
            ));
        }
        if !m.ground_stick_velocity.is_finite() || m.ground_stick_velocity > 0.0 {
            problems.push(format!(
                "movement.ground_stick_velocity must be finite and not positive, got {}",
                m.ground_stick_velocity
            ));
        }

        if let JumpMode::Windup { windup, liftoff } = self.jump {
            let valid = |t: f32| t.is_finite() && t >= 0.0;
            if !valid(windup) || !valid(liftoff) {
                problems.push(format!(
                    "jump windup and liftoff must be non-negative, got {windup} / {liftoff}"
                ));
            }
        }

        if let Some(combo) = &self.combo {
            if !combo.reset_time.is_finite() || combo.reset_time <= 0.0 {
                problems.push(format!(
                    "combo.reset_time must be positive, got {}",
                    combo.reset_time
                ));
            }
        }

        problems
    }
}
