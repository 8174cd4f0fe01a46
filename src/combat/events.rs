//! Combat domain: attack trigger messages exchanged with the animation system.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired once per accepted combo press.
#[derive(Debug)]
pub struct AttackTriggered {
    pub entity: Entity,
    pub attack_index: u8,
}

impl Message for AttackTriggered {}

/// Sent by the animation system when an attack swing completes.
#[derive(Debug)]
pub struct AttackSwingEnded {
    pub entity: Entity,
}

impl Message for AttackSwingEnded {}
