//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::integrator::SpeedTier;
use crate::movement::InputSample;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Vertical motion and jump bookkeeping, persisted across ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub vertical_velocity: f32,
    pub grounded: bool,
    pub jumping: bool,
    pub double_jump_available: bool,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            vertical_velocity: 0.0,
            grounded: false,
            jumping: false,
            double_jump_available: true,
        }
    }
}

/// Timed part of a jump that spans several ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JumpPhase {
    #[default]
    Idle,
    /// Input consumed, impulse pending.
    Windup { remaining: f32 },
    /// Impulse applied; the body may still report ground contact.
    Liftoff { remaining: f32 },
}

impl JumpPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, JumpPhase::Idle)
    }
}

/// Input direction relative to the camera, split into eight sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Octant {
    Forward,
    ForwardLeft,
    ForwardRight,
    Left,
    Right,
    Back,
    BackLeft,
    BackRight,
}

impl Octant {
    /// `None` when both axes are zero.
    pub fn from_axes(horizontal: f32, vertical: f32) -> Option<Self> {
        use std::cmp::Ordering::*;

        let h = horizontal.partial_cmp(&0.0).unwrap_or(Equal);
        let v = vertical.partial_cmp(&0.0).unwrap_or(Equal);
        match (v, h) {
            (Greater, Equal) => Some(Octant::Forward),
            (Greater, Less) => Some(Octant::ForwardLeft),
            (Greater, Greater) => Some(Octant::ForwardRight),
            (Equal, Less) => Some(Octant::Left),
            (Equal, Greater) => Some(Octant::Right),
            (Less, Equal) => Some(Octant::Back),
            (Less, Less) => Some(Octant::BackLeft),
            (Less, Greater) => Some(Octant::BackRight),
            (Equal, Equal) => None,
        }
    }
}

/// Input-derived flags the animation mapper reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementFlags {
    pub direction: Option<Octant>,
    pub tier: SpeedTier,
}

impl MovementFlags {
    pub fn from_input(input: &InputSample) -> Self {
        Self {
            direction: Octant::from_axes(input.horizontal, input.vertical),
            tier: input.speed_tier(),
        }
    }

    pub fn moving(&self) -> bool {
        self.direction.is_some()
    }

    /// Run or sprint.
    pub fn running(&self) -> bool {
        self.tier >= SpeedTier::Run
    }

    pub fn sprinting(&self) -> bool {
        self.tier == SpeedTier::Sprint
    }
}

/// Latest ground probe result for a physics-driven character.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct GroundContact(pub bool);

/// Distance from the body origin down to its feet.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundProbe {
    pub foot_offset: f32,
}
