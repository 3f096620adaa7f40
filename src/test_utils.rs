//! Test utilities for plugin testing

use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput, NativeKey};
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use crate::prelude::*;

/// Length of one fixed tick in tests, matching the default 50 Hz step.
pub const TEST_TICK: Duration = Duration::from_millis(20);

/// Creates a minimal test app with core Bevy plugins needed for testing
///
/// Time advances by exactly one fixed tick per update, so each
/// `app.update()` after the first runs `FixedUpdate` once.
pub fn create_test_app() -> App {
    let mut app = App::new();

    // Add minimal plugins needed for testing
    app.add_plugins((
        MinimalPlugins,
        bevy::asset::AssetPlugin::default(),
        bevy::input::InputPlugin,
        bevy::transform::TransformPlugin,
    ));

    // Initialize assets needed by various plugins
    app.init_asset::<bevy::render::mesh::Mesh>();
    app.init_asset::<bevy::pbr::StandardMaterial>();

    app.insert_resource(Time::<Fixed>::from_duration(TEST_TICK));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TEST_TICK));
    app.insert_resource(GameConfig::default());

    app
}

/// Runs the first update, which only initializes time and advances nothing.
fn warm_up(app: &mut App) {
    if app.world().resource::<Time<Real>>().last_update().is_none() {
        app.update();
    }
}

/// Runs `updates` frames of `TEST_TICK` each. Every frame runs `FixedUpdate`
/// exactly once, so this counts physics ticks as well.
pub fn run_updates(app: &mut App, updates: usize) {
    warm_up(app);
    for _ in 0..updates {
        app.update();
    }
}

fn send_key(app: &mut App, key_code: KeyCode, state: ButtonState) {
    app.world_mut().send_event(KeyboardInput {
        key_code,
        logical_key: Key::Unidentified(NativeKey::Unidentified),
        state,
        text: None,
        repeat: false,
        window: Entity::PLACEHOLDER,
    });
}

/// Helper to simulate a key press, seen as `just_pressed` on the next update
pub fn press_key(app: &mut App, key: KeyCode) {
    send_key(app, key, ButtonState::Pressed);
}

/// Helper to simulate a key release, applied on the next update
pub fn release_key(app: &mut App, key: KeyCode) {
    send_key(app, key, ButtonState::Released);
}
