//! Movement domain: input sampling for locomotion and combat.

use bevy::prelude::*;

use crate::movement::InputSample;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<InputSample>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    *input = InputSample {
        horizontal: x,
        vertical: y,
        run_held: keyboard.pressed(KeyCode::ShiftLeft),
        sprint_held: keyboard.pressed(KeyCode::ControlLeft),
        jump_pressed: keyboard.just_pressed(KeyCode::Space),
        attack_pressed: mouse.just_pressed(MouseButton::Left)
            || keyboard.just_pressed(KeyCode::KeyJ),
    };
}
