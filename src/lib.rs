//! Character locomotion and melee-combo controller.
//!
//! The per-tick algorithms (motion integration, jump gating, combo timing,
//! animation mapping, orientation) live on plain structs so any host can drive
//! them. [`ControllerPlugin`] wires the same pieces into a Bevy app, with an
//! avian3d rigid body standing in for the physical character.

pub mod animation;
pub mod character;
pub mod combat;
pub mod content;
#[cfg(feature = "dev-tools")]
pub mod dev;
pub mod movement;

use std::path::PathBuf;

use bevy::prelude::*;

pub use animation::{AnimationSignal, AnimationSink, TransitionTable, map_signal};
pub use character::Character;
pub use combat::{ComboController, ComboState, ComboTuning};
pub use content::{ConfigLoadError, ControllerConfig, Variant};
pub use movement::{
    CameraBasis, CameraProvider, InputSample, Locomotion, MotionState, MovementTuning,
    PhysicsBody,
};

/// Ordering of the per-frame controller pipeline.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSystems {
    /// Sample input and camera basis.
    Input,
    /// Query the physics world for ground contact.
    Sense,
    /// Integrate motion, jump and orientation.
    Locomotion,
    /// Advance the attack combo.
    Combat,
    /// Project state onto animator parameters.
    Animation,
}

/// Loads the controller config and installs every controller domain.
pub struct ControllerPlugin {
    /// RON or JSON config file.
    pub config_path: PathBuf,
    /// Preset used when the config file is missing or invalid.
    pub fallback: Variant,
}

impl ControllerPlugin {
    pub fn new(config_path: impl Into<PathBuf>, fallback: Variant) -> Self {
        Self {
            config_path: config_path.into(),
            fallback,
        }
    }
}

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        let config = content::load_or_preset(&self.config_path, self.fallback);

        app.insert_resource(config)
            .configure_sets(
                Update,
                (
                    ControllerSystems::Input,
                    ControllerSystems::Sense,
                    ControllerSystems::Locomotion,
                    ControllerSystems::Combat,
                    ControllerSystems::Animation,
                )
                    .chain(),
            )
            .add_plugins((
                movement::MovementPlugin,
                combat::CombatPlugin,
                animation::AnimationPlugin,
            ));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(dev::DevToolsPlugin);
    }
}
