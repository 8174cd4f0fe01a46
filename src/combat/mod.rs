//! Combat domain: the bounded attack combo composed alongside locomotion.

mod components;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{AttackPulse, ComboController, ComboState};
pub use events::{AttackSwingEnded, AttackTriggered};
pub use resources::{ComboTuning, MAX_COMBO_STEPS};

use bevy::prelude::*;

use crate::ControllerSystems;
use crate::combat::systems::{advance_combo, apply_swing_ends};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AttackTriggered>()
            .add_message::<AttackSwingEnded>()
            .add_systems(
                Update,
                (apply_swing_ends, advance_combo)
                    .chain()
                    .in_set(ControllerSystems::Combat),
            );
    }
}
