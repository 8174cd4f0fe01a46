//! Movement domain: the physical body the controller displaces.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Collision body owned by the host. The controller never reasons about
/// geometry; it only asks for contact and requests displacement.
pub trait PhysicsBody {
    fn is_grounded(&self) -> bool;

    /// Move by `velocity * dt`, resolving collisions as the body sees fit.
    fn move_by(&mut self, velocity: Vec3, dt: f32);
}

/// Adapter over an avian rigid body with manual gravity. The physics step
/// integrates `LinearVelocity` over the frame, so `move_by` hands the
/// velocity over instead of translating directly.
pub struct AvianBody<'a> {
    pub grounded: bool,
    pub velocity: &'a mut LinearVelocity,
}

impl PhysicsBody for AvianBody<'_> {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, velocity: Vec3, _dt: f32) {
        self.velocity.0 = velocity;
    }
}
