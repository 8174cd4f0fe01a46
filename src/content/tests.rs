//! Content domain: tests for config presets, parsing and validation.

use std::path::Path;

use super::{
    ConfigLoadError, ControllerConfig, Variant, load_controller_config, load_or_preset,
    parse_config,
};
use crate::animation::TransitionTable;
use crate::combat::ComboTuning;
use crate::movement::JumpMode;

const STRAFING_RON: &str = include_str!("../../assets/data/controller.ron");
const BRAWLER_JSON: &str = include_str!("../../assets/data/brawler.json");

#[test]
fn test_presets_are_valid() {
    for variant in [Variant::Strafing, Variant::Brawler] {
        let config = ControllerConfig::preset(variant);
        assert!(config.validate().is_empty(), "{variant:?} preset invalid");
    }
}

#[test]
fn test_presets_differ_in_jump_and_combo() {
    let strafing = ControllerConfig::preset(Variant::Strafing);
    let brawler = ControllerConfig::preset(Variant::Brawler);

    assert!(matches!(strafing.jump, JumpMode::Windup { .. }));
    assert!(matches!(strafing.animation, TransitionTable::Strafing(_)));
    assert!(strafing.combo.is_none());

    assert_eq!(brawler.jump, JumpMode::Instant { double_jump: true });
    assert!(matches!(brawler.animation, TransitionTable::Simple(_)));
    assert!(brawler.combo.is_some());
}

#[test]
fn test_shipped_ron_matches_strafing_preset() {
    let config = parse_config(STRAFING_RON, false, "controller.ron").unwrap();
    assert_eq!(config, ControllerConfig::preset(Variant::Strafing));
}

#[test]
fn test_shipped_json_matches_brawler_preset() {
    let config = parse_config(BRAWLER_JSON, true, "brawler.json").unwrap();
    assert_eq!(config, ControllerConfig::preset(Variant::Brawler));
}

#[test]
fn test_missing_movement_section_uses_defaults() {
    let ron = "(jump: Instant(double_jump: false), orientation: Linear, \
               animation: Simple((idle: 0, moving: 1, running: 2, jumping: 3)))";
    let config = parse_config(ron, false, "inline.ron").unwrap();

    assert_eq!(config.movement.walk_speed, 4.5);
    assert_eq!(config.movement.gravity, 9.81);
    assert_eq!(config.jump, JumpMode::Instant { double_jump: false });
    assert!(config.combo.is_none());
}

#[test]
fn test_out_of_order_speeds_are_rejected() {
    let ron = "(movement: (walk_speed: 9.0, run_speed: 7.5), \
               jump: Instant(double_jump: true), orientation: Linear, \
               animation: Simple((idle: 0, moving: 1, running: 2, jumping: 3)), \
               combo: (reset_time: 0.0))";

    match parse_config(ron, false, "bad.ron") {
        Err(ConfigLoadError::Invalid { file, problems }) => {
            assert_eq!(file, "bad.ron");
            assert_eq!(problems.len(), 2);
        }
        other => panic!("expected invalid config, got {other:?}"),
    }
}

#[test]
fn test_non_finite_values_are_rejected() {
    let mut config = ControllerConfig::preset(Variant::Brawler);
    config.movement.ground_stick_velocity = f32::NAN;
    config.movement.gravity = f32::INFINITY;
    config.combo = Some(ComboTuning {
        reset_time: f32::INFINITY,
    });

    let problems = config.validate();
    assert_eq!(problems.len(), 3, "{problems:?}");
    assert!(problems.iter().any(|p| p.contains("ground_stick_velocity")));
    assert!(problems.iter().any(|p| p.contains("gravity")));
    assert!(problems.iter().any(|p| p.contains("reset_time")));

    let mut windup = ControllerConfig::preset(Variant::Strafing);
    windup.jump = JumpMode::Windup {
        windup: f32::NAN,
        liftoff: 0.3,
    };
    assert_eq!(windup.validate().len(), 1);
}

#[test]
fn test_malformed_text_is_a_parse_error() {
    let err = parse_config("(jump: Sideways)", false, "broken.ron").unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load_controller_config(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io { .. }));
}

#[test]
fn test_unusable_file_falls_back_to_preset() {
    let config = load_or_preset(Path::new("does/not/exist.ron"), Variant::Brawler);
    assert_eq!(config, ControllerConfig::preset(Variant::Brawler));
}
