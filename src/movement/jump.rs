//! Movement domain: jump gating for ground, air and windup jumps.
//!
//! The jump controller moves a character between three logical states:
//! grounded, airborne after a ground jump, and airborne after the air jump.
//! A windup jump carries its delay in [`JumpPhase`] so the tick never blocks
//! and horizontal motion keeps integrating while the impulse is pending.

use bevy::prelude::*;

use crate::movement::{JumpMode, JumpPhase, MotionState};

/// Records this tick's ground contact and applies the landing reset.
///
/// A fresh landing always resets, and also cuts a liftoff grace short. While
/// contact persists, an idle character resets only once it stops rising, so
/// an instant jump survives the ticks before the body clears the ground
/// probe. A pending windup is never interrupted.
pub fn observe_ground(motion: &mut MotionState, phase: &mut JumpPhase, grounded: bool) {
    let landed = grounded && !motion.grounded;
    motion.grounded = grounded;

    if !grounded {
        return;
    }

    let resets = match phase {
        JumpPhase::Idle => landed || motion.vertical_velocity <= 0.0,
        JumpPhase::Liftoff { .. } => landed,
        JumpPhase::Windup { .. } => false,
    };
    if !resets {
        return;
    }

    if motion.jumping || landed {
        debug!(
            "Landed: jumping={}, vertical_velocity={:.2}",
            motion.jumping, motion.vertical_velocity
        );
    }
    *phase = JumpPhase::Idle;
    motion.jumping = false;
    motion.double_jump_available = true;
}

/// Counts down a pending windup or liftoff. Returns true on the tick the
/// deferred impulse is applied.
pub fn advance_phase(
    motion: &mut MotionState,
    phase: &mut JumpPhase,
    mode: JumpMode,
    jump_force: f32,
    dt: f32,
) -> bool {
    match *phase {
        JumpPhase::Idle => false,
        JumpPhase::Windup { remaining } => {
            let remaining = remaining - dt;
            if remaining > 0.0 {
                *phase = JumpPhase::Windup { remaining };
                return false;
            }
            launch(motion, phase, mode, jump_force);
            true
        }
        JumpPhase::Liftoff { remaining } => {
            let remaining = remaining - dt;
            *phase = if remaining > 0.0 {
                JumpPhase::Liftoff { remaining }
            } else {
                JumpPhase::Idle
            };
            false
        }
    }
}

/// What a jump press did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Ignored,
    /// Windup started; the impulse comes later.
    WindupStarted,
    GroundJump,
    AirJump,
}

/// Consumes a jump press according to the configured mode.
pub fn try_jump(
    motion: &mut MotionState,
    phase: &mut JumpPhase,
    mode: JumpMode,
    jump_force: f32,
) -> JumpOutcome {
    if !phase.is_idle() {
        return JumpOutcome::Ignored;
    }

    if motion.grounded {
        motion.jumping = true;
        return match mode {
            JumpMode::Windup { windup, .. } if windup > 0.0 => {
                *phase = JumpPhase::Windup { remaining: windup };
                debug!("Jump windup started: {:.2}s", windup);
                JumpOutcome::WindupStarted
            }
            _ => {
                launch(motion, phase, mode, jump_force);
                JumpOutcome::GroundJump
            }
        };
    }

    match mode {
        JumpMode::Instant { double_jump: true } if motion.double_jump_available => {
            motion.vertical_velocity = jump_force;
            motion.double_jump_available = false;
            motion.jumping = true;
            debug!("Air jump: vertical_velocity={:.2}", jump_force);
            JumpOutcome::AirJump
        }
        _ => JumpOutcome::Ignored,
    }
}

/// Cancels any pending windup without applying its impulse.
pub fn cancel(motion: &mut MotionState, phase: &mut JumpPhase) {
    if let JumpPhase::Windup { .. } = phase {
        debug!("Pending jump impulse discarded");
        motion.jumping = false;
    }
    *phase = JumpPhase::Idle;
}

fn launch(motion: &mut MotionState, phase: &mut JumpPhase, mode: JumpMode, jump_force: f32) {
    motion.vertical_velocity = jump_force;
    motion.jumping = true;
    *phase = match mode {
        JumpMode::Windup { liftoff, .. } if liftoff > 0.0 => {
            JumpPhase::Liftoff { remaining: liftoff }
        }
        _ => JumpPhase::Idle,
    };
    debug!(
        "Jump launched: vertical_velocity={:.2}, double_jump_available={}",
        jump_force, motion.double_jump_available
    );
}
