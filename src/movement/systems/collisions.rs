//! Movement domain: ground detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::{GameLayer, GroundContact, GroundProbe, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    config: Res<ControllerConfig>,
    mut query: Query<(&Transform, &GroundProbe, &mut GroundContact), With<Player>>,
) {
    // Only walkable surfaces count as support
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, probe, mut contact) in &mut query {
        let was_grounded = contact.0;

        // Cast from the body center so a probe starting inside the floor still hits
        let hit = spatial_query.cast_ray(
            transform.translation,
            Dir3::NEG_Y,
            probe.foot_offset + config.movement.ground_probe,
            true,
            &ground_filter,
        );

        contact.0 = hit.is_some();

        if contact.0 != was_grounded {
            debug!("Ground contact changed: grounded={}", contact.0);
        }
    }
}
