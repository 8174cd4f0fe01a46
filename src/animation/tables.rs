//! Animation domain: transition code tables.
//!
//! A product picks one table. Both resolve codes with the same priority:
//! an airborne or jumping character beats movement, movement beats idle.

use serde::{Deserialize, Serialize};

use crate::movement::{MovementFlags, Octant, SpeedTier};

/// Codes for each input octant. Octants without a code fall back to idle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalCodes {
    pub forward: Option<i32>,
    pub forward_left: Option<i32>,
    pub forward_right: Option<i32>,
    pub left: Option<i32>,
    pub right: Option<i32>,
    pub back: Option<i32>,
    pub back_left: Option<i32>,
    pub back_right: Option<i32>,
}

impl DirectionalCodes {
    /// Forward-facing codes only, as authored for strafing rigs.
    pub const fn forward_arc(forward: i32, forward_left: i32, forward_right: i32) -> Self {
        Self {
            forward: Some(forward),
            forward_left: Some(forward_left),
            forward_right: Some(forward_right),
            left: None,
            right: None,
            back: None,
            back_left: None,
            back_right: None,
        }
    }

    pub fn get(&self, octant: Octant) -> Option<i32> {
        match octant {
            Octant::Forward => self.forward,
            Octant::ForwardLeft => self.forward_left,
            Octant::ForwardRight => self.forward_right,
            Octant::Left => self.left,
            Octant::Right => self.right,
            Octant::Back => self.back,
            Octant::BackLeft => self.back_left,
            Octant::BackRight => self.back_right,
        }
    }
}

/// Speed tier × direction table for strafing rigs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrafingTable {
    pub idle: i32,
    pub walk: DirectionalCodes,
    pub run: DirectionalCodes,
    pub sprint: DirectionalCodes,
    pub jump_walk: i32,
    pub jump_run: i32,
}

impl Default for StrafingTable {
    fn default() -> Self {
        Self {
            idle: 0,
            walk: DirectionalCodes::forward_arc(1, 2, 2),
            run: DirectionalCodes::forward_arc(3, 4, 5),
            sprint: DirectionalCodes::forward_arc(6, 7, 8),
            jump_walk: 2,
            jump_run: 9,
        }
    }
}

impl StrafingTable {
    pub fn code(&self, airborne: bool, flags: &MovementFlags) -> i32 {
        if airborne {
            return if flags.running() {
                self.jump_run
            } else {
                self.jump_walk
            };
        }

        let Some(direction) = flags.direction else {
            return self.idle;
        };
        let codes = match flags.tier {
            SpeedTier::Sprint => &self.sprint,
            SpeedTier::Run => &self.run,
            SpeedTier::Walk => &self.walk,
        };
        codes.get(direction).unwrap_or(self.idle)
    }
}

/// Four-state table: idle, moving, running, jumping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleTable {
    pub idle: i32,
    pub moving: i32,
    pub running: i32,
    pub jumping: i32,
}

impl Default for SimpleTable {
    fn default() -> Self {
        Self {
            idle: 0,
            moving: 1,
            running: 2,
            jumping: 3,
        }
    }
}

impl SimpleTable {
    pub fn code(&self, airborne: bool, flags: &MovementFlags) -> i32 {
        if airborne {
            self.jumping
        } else if flags.moving() && flags.running() {
            self.running
        } else if flags.moving() {
            self.moving
        } else {
            self.idle
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionTable {
    Strafing(StrafingTable),
    Simple(SimpleTable),
}

impl TransitionTable {
    pub fn code(&self, airborne: bool, flags: &MovementFlags) -> i32 {
        match self {
            TransitionTable::Strafing(table) => table.code(airborne, flags),
            TransitionTable::Simple(table) => table.code(airborne, flags),
        }
    }
}
