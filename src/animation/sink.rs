//! Animation domain: the outbound animation sink.

use bevy::prelude::*;

use crate::animation::AnimationSignal;

/// Receiver of animation parameters, typically an animator rig.
pub trait AnimationSink {
    fn set_transition(&mut self, code: i32);
    fn set_attack_index(&mut self, index: u8);
    /// Fire-and-forget trigger, once per accepted combo step.
    fn trigger_attack(&mut self);
}

/// Pushes a signal into a sink. Callers without a sink simply skip this.
pub fn emit<S: AnimationSink + ?Sized>(signal: &AnimationSignal, sink: &mut S) {
    sink.set_transition(signal.transition_code);
    sink.set_attack_index(signal.attack_index);
    if signal.attack_trigger_pulse {
        sink.trigger_attack();
    }
}

/// Animator parameters mirrored on an entity for the rendering side to read.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimatorParams {
    pub transition: i32,
    pub attack_index: u8,
    /// Set on the frame a trigger fired; cleared before the next emission.
    pub attack_triggered: bool,
}

impl AnimationSink for AnimatorParams {
    fn set_transition(&mut self, code: i32) {
        self.transition = code;
    }

    fn set_attack_index(&mut self, index: u8) {
        self.attack_index = index;
    }

    fn trigger_attack(&mut self) {
        self.attack_triggered = true;
    }
}
