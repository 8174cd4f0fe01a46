//! Movement domain: camera-relative locomotion, gravity, jumping and facing.

mod body;
mod bootstrap;
mod components;
pub mod integrator;
pub mod jump;
mod locomotion;
pub mod orientation;
mod resources;
mod systems;

pub use body::{AvianBody, PhysicsBody};
pub use bootstrap::{BODY_LENGTH, BODY_RADIUS, spawn_character};
pub use components::{
    GameLayer, GroundContact, GroundProbe, JumpPhase, MotionState, MovementFlags, Octant, Player,
};
pub use integrator::SpeedTier;
pub use locomotion::Locomotion;
pub use resources::{
    CameraBasis, CameraProvider, InputSample, JumpMode, MovementTuning, OrientationBlend,
};

use bevy::prelude::*;

use crate::ControllerSystems;
use crate::movement::systems::{detect_ground, drive_locomotion, read_input, sample_camera_basis};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSample>()
            .init_resource::<CameraBasis>()
            .add_systems(
                Update,
                (read_input, sample_camera_basis).in_set(ControllerSystems::Input),
            )
            .add_systems(Update, detect_ground.in_set(ControllerSystems::Sense))
            .add_systems(
                Update,
                drive_locomotion.in_set(ControllerSystems::Locomotion),
            );
    }
}
