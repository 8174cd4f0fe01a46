//! Combat domain: the three-hit combo state machine.

use bevy::prelude::*;

use crate::combat::resources::{ComboTuning, MAX_COMBO_STEPS};

/// Position in the attack chain. `step` is 0 while idle, 1..=3 while attacking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComboState {
    pub active: bool,
    pub step: u8,
    /// Seconds since the last accepted press.
    pub timer: f32,
}

/// A one-shot attack trigger for the given combo step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackPulse {
    pub attack_index: u8,
}

/// Runs independently of locomotion: attacking while airborne or moving is allowed.
#[derive(Component, Debug, Clone, Default)]
pub struct ComboController {
    state: ComboState,
    pulsed: bool,
}

impl ComboController {
    pub fn state(&self) -> &ComboState {
        &self.state
    }

    /// 0 while idle.
    pub fn attack_index(&self) -> u8 {
        self.state.step
    }

    /// Whether the last `advance` fired an attack trigger.
    pub fn pulsed_this_tick(&self) -> bool {
        self.pulsed
    }

    /// Ages the active combo, drops it silently on timeout, then applies
    /// this tick's press. Returns the trigger to fire, if any.
    pub fn advance(
        &mut self,
        attack_pressed: bool,
        tuning: &ComboTuning,
        dt: f32,
    ) -> Option<AttackPulse> {
        if self.state.active {
            self.state.timer += dt;
            if self.state.timer > tuning.reset_time {
                debug!(
                    "Combo timed out at step {} after {:.2}s",
                    self.state.step, self.state.timer
                );
                self.reset();
            }
        }

        let pulse = if attack_pressed {
            self.press()
        } else {
            None
        };
        self.pulsed = pulse.is_some();
        pulse
    }

    /// The animation system finished a swing. Only the final step forces a reset.
    pub fn end_swing(&mut self) -> bool {
        if self.state.step >= MAX_COMBO_STEPS {
            debug!("Final combo swing ended, returning to idle");
            self.reset();
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.state = ComboState::default();
    }

    fn press(&mut self) -> Option<AttackPulse> {
        if self.state.step >= MAX_COMBO_STEPS {
            return None;
        }

        self.state.active = true;
        self.state.step += 1;
        self.state.timer = 0.0;
        debug!("Combo step {}", self.state.step);

        Some(AttackPulse {
            attack_index: self.state.step,
        })
    }
}
