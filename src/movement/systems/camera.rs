//! Movement domain: camera basis sampling.

use bevy::prelude::*;

use crate::movement::CameraBasis;

/// Flattens the active 3D camera's axes. Keeps world axes when there is no camera.
pub(crate) fn sample_camera_basis(
    cameras: Query<&GlobalTransform, With<Camera3d>>,
    mut basis: ResMut<CameraBasis>,
) {
    let Some(camera) = cameras.iter().next() else {
        *basis = CameraBasis::default();
        return;
    };

    *basis = CameraBasis::from_view(*camera.forward(), *camera.right());
}
