//! Movement domain: turning the character toward its move direction.

use bevy::prelude::*;

use crate::movement::OrientationBlend;

/// Yaw rotation whose forward axis (-Z) points along `direction`.
/// `None` when the direction has no horizontal extent.
pub fn heading_rotation(direction: Vec3) -> Option<Quat> {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    if flat.length_squared() <= f32::EPSILON {
        return None;
    }
    let flat = flat.normalize();
    Some(Quat::from_rotation_y(f32::atan2(-flat.x, -flat.z)))
}

/// Blends `current` toward the heading of `horizontal_motion` by
/// `turn_rate * dt`. Zero motion leaves the orientation untouched.
pub fn face_toward(
    current: Quat,
    horizontal_motion: Vec3,
    blend: OrientationBlend,
    turn_rate: f32,
    dt: f32,
) -> Quat {
    let Some(target) = heading_rotation(horizontal_motion) else {
        return current;
    };

    let t = (turn_rate * dt).clamp(0.0, 1.0);
    match blend {
        OrientationBlend::Spherical => current.slerp(target, t),
        OrientationBlend::Linear => current.lerp(target, t),
    }
}
