//! Movement domain: driving locomotion from sampled input.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::{AvianBody, CameraBasis, GroundContact, InputSample, Locomotion, Player};

pub(crate) fn drive_locomotion(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    input: Res<InputSample>,
    basis: Res<CameraBasis>,
    mut query: Query<
        (
            &mut Locomotion,
            &GroundContact,
            &mut LinearVelocity,
            &mut Transform,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut locomotion, contact, mut velocity, mut transform) in &mut query {
        if !locomotion.is_enabled() {
            velocity.0 = Vec3::ZERO;
            continue;
        }

        let mut body = AvianBody {
            grounded: contact.0,
            velocity: &mut *velocity,
        };
        locomotion.step(&input, &basis, &mut body, &config, dt);

        transform.rotation = locomotion.facing;
    }
}
