//! Animation domain: tests for transition tables, mapping and emission.

use super::{
    AnimationSignal, AnimationSink, AnimatorParams, DirectionalCodes, SimpleTable, StrafingTable,
    TransitionTable, emit, map_signal,
};
use crate::combat::ComboState;
use crate::movement::{InputSample, MotionState, MovementFlags};

fn grounded() -> MotionState {
    MotionState {
        grounded: true,
        ..Default::default()
    }
}

fn flags(horizontal: f32, vertical: f32, run: bool, sprint: bool) -> MovementFlags {
    MovementFlags::from_input(&InputSample {
        horizontal,
        vertical,
        run_held: run,
        sprint_held: sprint,
        ..Default::default()
    })
}

#[derive(Default)]
struct RecordingSink {
    transitions: Vec<i32>,
    attack_indices: Vec<u8>,
    triggers: usize,
}

impl AnimationSink for RecordingSink {
    fn set_transition(&mut self, code: i32) {
        self.transitions.push(code);
    }

    fn set_attack_index(&mut self, index: u8) {
        self.attack_indices.push(index);
    }

    fn trigger_attack(&mut self) {
        self.triggers += 1;
    }
}

// -----------------------------------------------------------------------------
// Strafing table
// -----------------------------------------------------------------------------

#[test]
fn test_strafing_codes_by_tier_and_direction() {
    let table = StrafingTable::default();

    assert_eq!(table.code(false, &flags(0.0, 0.0, false, false)), 0);

    assert_eq!(table.code(false, &flags(0.0, 1.0, false, false)), 1);
    assert_eq!(table.code(false, &flags(-1.0, 1.0, false, false)), 2);
    assert_eq!(table.code(false, &flags(1.0, 1.0, false, false)), 2);

    assert_eq!(table.code(false, &flags(0.0, 1.0, true, false)), 3);
    assert_eq!(table.code(false, &flags(-1.0, 1.0, true, false)), 4);
    assert_eq!(table.code(false, &flags(1.0, 1.0, true, false)), 5);

    assert_eq!(table.code(false, &flags(0.0, 1.0, true, true)), 6);
    assert_eq!(table.code(false, &flags(-1.0, 1.0, true, true)), 7);
    assert_eq!(table.code(false, &flags(1.0, 1.0, true, true)), 8);
}

#[test]
fn test_strafing_unmapped_directions_fall_back_to_idle() {
    let table = StrafingTable::default();

    assert_eq!(table.code(false, &flags(0.0, -1.0, false, false)), table.idle);
    assert_eq!(table.code(false, &flags(1.0, 0.0, true, false)), table.idle);
    assert_eq!(table.code(false, &flags(-1.0, -1.0, true, true)), table.idle);
}

#[test]
fn test_strafing_custom_back_codes() {
    let table = StrafingTable {
        walk: DirectionalCodes {
            back: Some(11),
            ..DirectionalCodes::forward_arc(1, 2, 2)
        },
        ..StrafingTable::default()
    };
    assert_eq!(table.code(false, &flags(0.0, -1.0, false, false)), 11);
}

#[test]
fn test_strafing_jump_overrides_movement() {
    let table = StrafingTable::default();

    assert_eq!(table.code(true, &flags(0.0, 1.0, false, false)), 2);
    assert_eq!(table.code(true, &flags(0.0, 1.0, true, false)), 9);
    assert_eq!(table.code(true, &flags(0.0, 0.0, true, true)), 9);
}

// -----------------------------------------------------------------------------
// Simple table
// -----------------------------------------------------------------------------

#[test]
fn test_simple_table_priority() {
    let table = SimpleTable::default();

    assert_eq!(table.code(false, &flags(0.0, 0.0, true, false)), table.idle);
    assert_eq!(table.code(false, &flags(0.0, -1.0, false, false)), table.moving);
    assert_eq!(table.code(false, &flags(1.0, 0.0, true, false)), table.running);
    assert_eq!(table.code(true, &flags(1.0, 0.0, true, false)), table.jumping);
    assert_eq!(table.code(true, &flags(0.0, 0.0, false, false)), table.jumping);
}

// -----------------------------------------------------------------------------
// Mapper
// -----------------------------------------------------------------------------

#[test]
fn test_mapper_is_pure() {
    let table = TransitionTable::Strafing(StrafingTable::default());
    let motion = grounded();
    let combo = ComboState {
        active: true,
        step: 2,
        timer: 0.1,
    };
    let moving = flags(1.0, 1.0, true, false);

    let first = map_signal(&motion, &moving, Some(&combo), true, &table);
    let second = map_signal(&motion, &moving, Some(&combo), true, &table);

    assert_eq!(first, second);
    assert_eq!(motion, grounded());
    assert_eq!(
        first,
        AnimationSignal {
            transition_code: 5,
            attack_index: 2,
            attack_trigger_pulse: true,
        }
    );
}

#[test]
fn test_mapper_treats_airborne_as_jumping() {
    let table = TransitionTable::Simple(SimpleTable::default());
    let falling = MotionState {
        grounded: false,
        jumping: false,
        ..Default::default()
    };
    let jumping_on_ground = MotionState {
        jumping: true,
        ..grounded()
    };
    let idle = flags(0.0, 0.0, false, false);

    assert_eq!(map_signal(&falling, &idle, None, false, &table).transition_code, 3);
    assert_eq!(
        map_signal(&jumping_on_ground, &idle, None, false, &table).transition_code,
        3
    );
    assert_eq!(map_signal(&grounded(), &idle, None, false, &table).transition_code, 0);
}

#[test]
fn test_mapper_without_combo_reports_zero_index() {
    let table = TransitionTable::Simple(SimpleTable::default());
    let signal = map_signal(&grounded(), &flags(0.0, 0.0, false, false), None, false, &table);
    assert_eq!(signal.attack_index, 0);
    assert!(!signal.attack_trigger_pulse);
}

// -----------------------------------------------------------------------------
// Emission
// -----------------------------------------------------------------------------

#[test]
fn test_emit_fires_trigger_only_on_pulse() {
    let mut sink = RecordingSink::default();

    emit(
        &AnimationSignal {
            transition_code: 3,
            attack_index: 1,
            attack_trigger_pulse: true,
        },
        &mut sink,
    );
    emit(
        &AnimationSignal {
            transition_code: 1,
            attack_index: 1,
            attack_trigger_pulse: false,
        },
        &mut sink,
    );

    assert_eq!(sink.transitions, vec![3, 1]);
    assert_eq!(sink.attack_indices, vec![1, 1]);
    assert_eq!(sink.triggers, 1);
}

#[test]
fn test_animator_params_mirror_signal() {
    let mut params = AnimatorParams::default();

    emit(
        &AnimationSignal {
            transition_code: 7,
            attack_index: 3,
            attack_trigger_pulse: true,
        },
        &mut params,
    );

    assert_eq!(
        params,
        AnimatorParams {
            transition: 7,
            attack_index: 3,
            attack_triggered: true,
        }
    );
}
