//! Animation domain: publishing signals to animator parameters.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::animation::{AnimatorParams, emit, map_signal};
use crate::combat::{AttackTriggered, ComboController};
use crate::content::ControllerConfig;
use crate::movement::Locomotion;

pub(crate) fn publish_animation_signals(
    config: Res<ControllerConfig>,
    mut query: Query<(
        Entity,
        &Locomotion,
        Option<&ComboController>,
        Option<&mut AnimatorParams>,
    )>,
    mut triggers: MessageWriter<AttackTriggered>,
) {
    for (entity, locomotion, combo, params) in &mut query {
        // No animator attached: nothing to drive
        let Some(mut params) = params else {
            continue;
        };
        if !locomotion.is_enabled() {
            continue;
        }

        let signal = map_signal(
            &locomotion.motion,
            &locomotion.flags,
            combo.map(|c| c.state()),
            combo.is_some_and(|c| c.pulsed_this_tick()),
            &config.animation,
        );

        let previous = params.transition;
        params.attack_triggered = false;
        emit(&signal, &mut *params);

        if previous != signal.transition_code {
            debug!(
                "Transition {} -> {} for {:?}",
                previous, signal.transition_code, entity
            );
        }
        if signal.attack_trigger_pulse {
            triggers.write(AttackTriggered {
                entity,
                attack_index: signal.attack_index,
            });
        }
    }
}
