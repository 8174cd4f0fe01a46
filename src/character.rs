//! A controlled character that owns its collaborators.
//!
//! Hosts without an ECS construct a [`Character`] once at spawn with their
//! physics body, camera and (optionally) animation sink, then call
//! [`Character::tick`] once per simulation step. The Bevy plugin drives the
//! same locomotion, combo and mapping code through systems instead.

use bevy::prelude::*;

use crate::animation::{AnimationSignal, AnimationSink, emit, map_signal};
use crate::combat::{ComboController, ComboState};
use crate::content::ControllerConfig;
use crate::movement::{CameraProvider, InputSample, Locomotion, MotionState, PhysicsBody};

pub struct Character<B, C, S> {
    config: ControllerConfig,
    body: B,
    camera: C,
    sink: Option<S>,
    locomotion: Locomotion,
    combo: Option<ComboController>,
}

impl<B, C, S> Character<B, C, S>
where
    B: PhysicsBody,
    C: CameraProvider,
    S: AnimationSink,
{
    /// The combo add-on is present only when the config carries combo tuning.
    pub fn new(config: ControllerConfig, body: B, camera: C, sink: Option<S>) -> Self {
        let combo = config.combo.as_ref().map(|_| ComboController::default());
        Self {
            config,
            body,
            camera,
            sink,
            locomotion: Locomotion::default(),
            combo,
        }
    }

    /// One simulation step: locomotion, then combo, then animation output.
    /// Returns the signal that was (or would have been) emitted.
    pub fn tick(&mut self, input: InputSample, dt: f32) -> AnimationSignal {
        if !self.locomotion.is_enabled() {
            return self.signal(false);
        }

        let basis = self.camera.basis();
        self.locomotion
            .step(&input, &basis, &mut self.body, &self.config, dt);

        let pulse = match (self.combo.as_mut(), self.config.combo.as_ref()) {
            (Some(combo), Some(tuning)) => combo.advance(input.attack_pressed, tuning, dt),
            _ => None,
        };

        let signal = self.signal(pulse.is_some());
        if let Some(sink) = self.sink.as_mut() {
            emit(&signal, sink);
        }
        signal
    }

    /// Acknowledgment from the animation system that a swing completed.
    pub fn end_attack_swing(&mut self) {
        if let Some(combo) = self.combo.as_mut() {
            combo.end_swing();
        }
    }

    /// Disabling discards a pending jump impulse; ticks become no-ops.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.locomotion.set_enabled(enabled);
    }

    pub fn is_enabled(&self) -> bool {
        self.locomotion.is_enabled()
    }

    pub fn motion(&self) -> &MotionState {
        &self.locomotion.motion
    }

    pub fn locomotion(&self) -> &Locomotion {
        &self.locomotion
    }

    pub fn combo(&self) -> Option<&ComboState> {
        self.combo.as_ref().map(|c| c.state())
    }

    pub fn facing(&self) -> Quat {
        self.locomotion.facing
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    fn signal(&self, pulse: bool) -> AnimationSignal {
        map_signal(
            &self.locomotion.motion,
            &self.locomotion.flags,
            self.combo.as_ref().map(|c| c.state()),
            pulse,
            &self.config.animation,
        )
    }
}
