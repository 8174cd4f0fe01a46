//! Movement domain: system modules for locomotion updates.

pub(crate) mod camera;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use camera::sample_camera_basis;
pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::drive_locomotion;
