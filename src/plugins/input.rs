//! Pilot input plugin - Self-contained plugin pattern
//!
//! Samples keyboard and mouse once per frame into each ship's
//! [`FlightInput`], grabs the cursor, and quits on `Escape`.

use crate::prelude::*;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::window::{CursorGrabMode, PrimaryWindow};

pub struct PilotInputPlugin;

impl Plugin for PilotInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>();
        app.add_systems(Startup, grab_cursor);
        app.add_systems(Update, (capture_flight_input, quit_on_escape));
    }
}

fn axis(keys: &ButtonInput<KeyCode>, positive: [KeyCode; 2], negative: [KeyCode; 2]) -> f32 {
    let positive = keys.any_pressed(positive) as i8;
    let negative = keys.any_pressed(negative) as i8;
    f32::from(positive - negative)
}

/// Reads this frame's controls. Mouse motion arrives in screen space with
/// +y down, so it is flipped to make "mouse up" a positive look.
pub fn capture_flight_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse_motion: Option<Res<AccumulatedMouseMotion>>,
    config: Res<GameConfig>,
    mut ships: Query<&mut FlightInput>,
) {
    let delta = mouse_motion.map(|motion| motion.delta).unwrap_or_default();
    let look = Vec2::new(delta.x, -delta.y) * config.input.look_scale;

    let next = FlightInput {
        look,
        forward: keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) as u8 as f32,
        strafe: axis(
            &keys,
            [KeyCode::KeyD, KeyCode::ArrowRight],
            [KeyCode::KeyA, KeyCode::ArrowLeft],
        ),
    };

    for mut input in &mut ships {
        input.set_if_neq(next);
    }
}

pub fn grab_cursor(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    let Ok(mut window) = windows.single_mut() else {
        warn!("No primary window, cursor left ungrabbed");
        return;
    };

    window.cursor_options.grab_mode = CursorGrabMode::Locked;
    window.cursor_options.visible = false;
}

pub fn quit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write_default();
    }
}
