//! Animation domain: transition tables, signal mapping and the animator sink.

mod signal;
mod sink;
mod systems;
mod tables;
#[cfg(test)]
mod tests;

pub use signal::{AnimationSignal, map_signal};
pub use sink::{AnimationSink, AnimatorParams, emit};
pub use tables::{DirectionalCodes, SimpleTable, StrafingTable, TransitionTable};

use bevy::prelude::*;

use crate::ControllerSystems;
use crate::animation::systems::publish_animation_signals;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            publish_animation_signals.in_set(ControllerSystems::Animation),
        );
    }
}
