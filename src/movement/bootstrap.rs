//! Movement domain: spawning a physics-driven controlled character.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::AnimatorParams;
use crate::combat::ComboController;
use crate::content::ControllerConfig;
use crate::movement::{GameLayer, GroundContact, GroundProbe, Locomotion, Player};

pub const BODY_RADIUS: f32 = 0.4;
pub const BODY_LENGTH: f32 = 1.0;

/// Spawns the player body with locomotion, ground probing and an animator.
/// The combo add-on is attached only when the config enables it.
pub fn spawn_character(
    commands: &mut Commands,
    config: &ControllerConfig,
    transform: Transform,
) -> Entity {
    let mut entity = commands.spawn((
        // Identity & Locomotion
        (
            Player,
            Locomotion::with_facing(transform.rotation),
            GroundContact::default(),
            GroundProbe {
                foot_offset: BODY_LENGTH * 0.5 + BODY_RADIUS,
            },
            AnimatorParams::default(),
        ),
        transform,
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(BODY_RADIUS, BODY_LENGTH),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated by the controller
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));

    if config.combo.is_some() {
        entity.insert(ComboController::default());
    }

    let id = entity.id();
    info!(
        "Spawned character {:?}: jump={:?}, orientation={:?}, combo={}",
        id,
        config.jump,
        config.orientation,
        config.combo.is_some()
    );
    id
}
