//! Combat domain: unit tests for the combo state machine.

use super::{AttackPulse, ComboController, ComboState, ComboTuning, MAX_COMBO_STEPS};

const DT: f32 = 0.01;

fn tuning() -> ComboTuning {
    ComboTuning { reset_time: 0.5 }
}

#[test]
fn test_first_press_starts_combo() {
    let mut combo = ComboController::default();

    let pulse = combo.advance(true, &tuning(), DT);

    assert_eq!(pulse, Some(AttackPulse { attack_index: 1 }));
    assert!(combo.pulsed_this_tick());
    assert_eq!(
        *combo.state(),
        ComboState {
            active: true,
            step: 1,
            timer: 0.0,
        }
    );
    assert_eq!(combo.attack_index(), 1);
}

#[test]
fn test_presses_chain_up_to_cap() {
    let mut combo = ComboController::default();

    for expected in 1..=MAX_COMBO_STEPS {
        let pulse = combo.advance(true, &tuning(), DT);
        assert_eq!(
            pulse,
            Some(AttackPulse {
                attack_index: expected
            })
        );
        combo.advance(false, &tuning(), DT);
    }

    // Extra presses at the cap are ignored and fire nothing
    let timer_before = combo.state().timer;
    assert_eq!(combo.advance(true, &tuning(), DT), None);
    assert!(!combo.pulsed_this_tick());
    assert_eq!(combo.state().step, MAX_COMBO_STEPS);
    assert!(combo.state().timer > timer_before);
}

#[test]
fn test_press_resets_timer() {
    let mut combo = ComboController::default();
    combo.advance(true, &tuning(), DT);
    for _ in 0..20 {
        combo.advance(false, &tuning(), DT);
    }
    assert!(combo.state().timer > 0.1);

    combo.advance(true, &tuning(), DT);
    assert_eq!(combo.state().step, 2);
    assert_eq!(combo.state().timer, 0.0);
}

#[test]
fn test_timeout_returns_to_idle_silently() {
    let tuning = tuning();
    let mut combo = ComboController::default();
    combo.advance(true, &tuning, DT);

    let ticks = ((tuning.reset_time + 0.01) / DT).ceil() as usize + 1;
    for _ in 0..ticks {
        assert_eq!(combo.advance(false, &tuning, DT), None);
    }

    assert_eq!(*combo.state(), ComboState::default());
    assert_eq!(combo.attack_index(), 0);
}

#[test]
fn test_timeout_happens_exactly_once_from_any_step() {
    let tuning = tuning();

    for presses in 1..=MAX_COMBO_STEPS {
        let mut combo = ComboController::default();
        for _ in 0..presses {
            combo.advance(true, &tuning, DT);
        }
        assert_eq!(combo.state().step, presses);

        let mut resets = 0;
        for _ in 0..200 {
            let was_active = combo.state().active;
            combo.advance(false, &tuning, DT);
            if was_active && !combo.state().active {
                resets += 1;
            }
        }
        assert_eq!(resets, 1);
        assert_eq!(combo.state().step, 0);
    }
}

#[test]
fn test_press_on_timeout_tick_starts_new_combo() {
    let mut combo = ComboController::default();
    combo.advance(true, &tuning(), DT);
    combo.advance(true, &tuning(), DT);

    let pulse = combo.advance(true, &tuning(), 1.0);

    assert_eq!(pulse, Some(AttackPulse { attack_index: 1 }));
    assert_eq!(combo.state().step, 1);
}

#[test]
fn test_swing_end_resets_only_final_step() {
    let mut combo = ComboController::default();
    combo.advance(true, &tuning(), DT);
    combo.advance(true, &tuning(), DT);

    assert!(!combo.end_swing());
    assert_eq!(combo.state().step, 2);
    assert!(combo.state().active);

    combo.advance(true, &tuning(), DT);
    assert!(combo.end_swing());
    assert_eq!(*combo.state(), ComboState::default());

    // Ending a swing while idle is harmless
    assert!(!combo.end_swing());
}

#[test]
fn test_step_stays_in_range_for_mixed_input() {
    let tuning = tuning();
    let mut combo = ComboController::default();

    for tick in 0..2000u32 {
        let pressed = tick % 7 == 0 || tick % 11 == 0 || (tick / 100) % 3 == 0;
        let dt = if tick % 13 == 0 { 0.3 } else { DT };
        combo.advance(pressed, &tuning, dt);
        if tick % 17 == 0 {
            combo.end_swing();
        }
        assert!(combo.state().step <= MAX_COMBO_STEPS);
        assert_eq!(combo.state().active, combo.state().step > 0);
    }
}
