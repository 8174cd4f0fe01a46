//! Debug-only controller tooling.
//!
//! F3 toggles a per-frame state dump; F4 ends the current attack swing, standing
//! in for an animation system that reports swing completion.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{AttackSwingEnded, ComboController};
use crate::movement::{Locomotion, Player};

#[derive(Resource, Debug, Default)]
pub struct DevLog {
    pub enabled: bool,
}

pub struct DevToolsPlugin;

impl Plugin for DevToolsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DevLog>()
            .add_systems(Update, (handle_dev_keys, log_controller_state).chain());
    }
}

fn handle_dev_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut dev_log: ResMut<DevLog>,
    players: Query<Entity, (With<Player>, With<ComboController>)>,
    mut swing_ends: MessageWriter<AttackSwingEnded>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        dev_log.enabled = !dev_log.enabled;
        info!("[DEV] Controller state log: {}", dev_log.enabled);
    }

    if keyboard.just_pressed(KeyCode::F4) {
        for entity in &players {
            swing_ends.write(AttackSwingEnded { entity });
        }
    }
}

fn log_controller_state(
    dev_log: Res<DevLog>,
    query: Query<(&Locomotion, Option<&ComboController>), With<Player>>,
) {
    if !dev_log.enabled {
        return;
    }

    for (locomotion, combo) in &query {
        let motion = &locomotion.motion;
        info!(
            "[DEV] grounded={} jumping={} double_jump={} vy={:.2} phase={:?} combo={:?}",
            motion.grounded,
            motion.jumping,
            motion.double_jump_available,
            motion.vertical_velocity,
            locomotion.jump_phase,
            combo.map(|c| c.state())
        );
    }
}
