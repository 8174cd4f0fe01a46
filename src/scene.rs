//! Demo scene: a floor, a light, a fixed camera and one controlled character.

use avian3d::prelude::*;
use bevy::prelude::*;
use helton_controller::movement::{BODY_LENGTH, BODY_RADIUS, GameLayer, spawn_character};
use helton_controller::ControllerConfig;

const FLOOR_SIZE: f32 = 40.0;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_world, spawn_player));
    }
}

fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 7.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(FLOOR_SIZE, FLOOR_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb(0.35, 0.45, 0.35))),
        Transform::default(),
        RigidBody::Static,
        Collider::cuboid(FLOOR_SIZE, 0.1, FLOOR_SIZE),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

fn spawn_player(
    mut commands: Commands,
    config: Res<ControllerConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let player = spawn_character(&mut commands, &config, Transform::from_xyz(0.0, 2.0, 0.0));

    commands.entity(player).insert((
        Mesh3d(meshes.add(Capsule3d::new(BODY_RADIUS, BODY_LENGTH))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
    ));
}
