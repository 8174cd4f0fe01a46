//! Combat domain: combo systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::events::AttackSwingEnded;
use crate::combat::ComboController;
use crate::content::ControllerConfig;
use crate::movement::{InputSample, Locomotion};

pub(crate) fn apply_swing_ends(
    mut swing_ends: MessageReader<AttackSwingEnded>,
    mut query: Query<&mut ComboController>,
) {
    for ended in swing_ends.read() {
        if let Ok(mut combo) = query.get_mut(ended.entity) {
            combo.end_swing();
        }
    }
}

pub(crate) fn advance_combo(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    input: Res<InputSample>,
    mut query: Query<(&mut ComboController, Option<&Locomotion>)>,
) {
    let Some(tuning) = config.combo.as_ref() else {
        return;
    };
    let dt = time.delta_secs();

    for (mut combo, locomotion) in &mut query {
        // A disabled character neither attacks nor ages its combo
        if locomotion.is_some_and(|l| !l.is_enabled()) {
            continue;
        }
        combo.advance(input.attack_pressed, tuning, dt);
    }
}
