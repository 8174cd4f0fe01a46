mod scene;

use avian3d::prelude::*;
use bevy::prelude::*;
use helton_controller::{ControllerPlugin, Variant};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Helton".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            ControllerPlugin::new("assets/data/controller.ron", Variant::Strafing),
            scene::ScenePlugin,
        ))
        .run();
}
