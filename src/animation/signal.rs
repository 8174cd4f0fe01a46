//! Animation domain: projecting controller state onto animation signals.

use crate::animation::TransitionTable;
use crate::combat::ComboState;
use crate::movement::{MotionState, MovementFlags};

/// Derived every tick; never fed back into controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationSignal {
    pub transition_code: i32,
    /// 0 while no combo is running.
    pub attack_index: u8,
    pub attack_trigger_pulse: bool,
}

/// Pure mapping from the current motion, input flags and combo state.
pub fn map_signal(
    motion: &MotionState,
    flags: &MovementFlags,
    combo: Option<&ComboState>,
    attack_pulse: bool,
    table: &TransitionTable,
) -> AnimationSignal {
    let airborne = motion.jumping || !motion.grounded;

    AnimationSignal {
        transition_code: table.code(airborne, flags),
        attack_index: combo.map_or(0, |c| c.step),
        attack_trigger_pulse: attack_pulse,
    }
}
