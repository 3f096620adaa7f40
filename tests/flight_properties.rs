//! Seeded property tests for the flight control law, chase camera and lighting presets

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use skyship::physics::chase::{ChaseCamera, ChaseCameraConfig};
use skyship::physics::flight::{
    FlightInput, FlightState, FlightTuning, clamp_altitude, regulate_velocity,
};
use skyship::resources::{LightingConfig, LightingPresets, LightingRig, TimeOfDay};

const DT: f32 = 0.02;
const CASES: usize = 200;

fn random_vec3(rng: &mut ChaCha8Rng, extent: f32) -> Vec3 {
    Vec3::new(
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
    )
}

fn random_input(rng: &mut ChaCha8Rng, look_extent: f32) -> FlightInput {
    FlightInput {
        look: Vec2::new(
            rng.random_range(-look_extent..look_extent),
            rng.random_range(-look_extent..look_extent),
        ),
        forward: if rng.random_bool(0.5) { 1.0 } else { 0.0 },
        strafe: rng.random_range(-1.0..=1.0),
    }
}

#[test]
fn test_pitch_stays_within_limit_under_hard_look_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let tuning = FlightTuning::default();
    let mut state = FlightState::default();
    let mut at_limit = 0;

    for _ in 0..CASES * 10 {
        state = state.steer(&random_input(&mut rng, 50.0), &tuning, DT);

        assert!(state.pitch.abs() <= tuning.pitch_limit, "pitch {}", state.pitch);
        if state.pitch.abs() == tuning.pitch_limit {
            at_limit += 1;
        }
    }

    assert!(at_limit > 0, "pitch never reached the limit");
}

#[test]
fn test_bank_stays_within_max_for_unit_look_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let tuning = FlightTuning::default();
    let mut state = FlightState::default();

    for _ in 0..CASES * 10 {
        state = state.steer(&random_input(&mut rng, 1.0), &tuning, DT);

        assert!(
            state.visual_bank.abs() <= tuning.max_bank_angle + 1e-4,
            "bank {}",
            state.visual_bank
        );
    }
}

#[test]
fn test_bank_levels_out_without_look_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let tuning = FlightTuning::default();

    for _ in 0..CASES {
        let mut state = FlightState {
            yaw: rng.random_range(-180.0..180.0),
            pitch: rng.random_range(-80.0..80.0),
            visual_bank: rng.random_range(-30.0..30.0),
        };
        let attitude = (state.yaw, state.pitch);

        for _ in 0..500 {
            state = state.steer(&FlightInput::default(), &tuning, DT);
        }

        assert!(state.visual_bank.abs() < 1e-3);
        assert_eq!((state.yaw, state.pitch), attitude);
    }
}

#[test]
fn test_thrusting_speed_never_exceeds_max() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let tuning = FlightTuning::default();

    for _ in 0..CASES {
        let velocity = random_vec3(&mut rng, 120.0);
        let thrust = random_vec3(&mut rng, 1.0) + Vec3::X * 5.0;

        let regulated = regulate_velocity(velocity, thrust, &tuning, DT);

        assert!(regulated.length() <= tuning.max_speed + 1e-3);
        if velocity.length() <= tuning.max_speed {
            assert_eq!(regulated, velocity);
        }
    }
}

#[test]
fn test_idle_speed_decays_monotonically() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let tuning = FlightTuning::default();

    for _ in 0..CASES {
        let mut velocity = random_vec3(&mut rng, 50.0);
        let mut speed = velocity.length();

        for _ in 0..50 {
            velocity = regulate_velocity(velocity, Vec3::ZERO, &tuning, DT);
            assert!(velocity.length() <= speed + 1e-5);
            speed = velocity.length();
        }
    }
}

#[test]
fn test_altitude_is_always_within_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(47);
    let tuning = FlightTuning::default();

    for _ in 0..CASES {
        let position = random_vec3(&mut rng, 100.0);
        let velocity = random_vec3(&mut rng, 20.0);

        let (clamped, new_velocity) = clamp_altitude(position, velocity, &tuning);

        assert!(clamped.y >= tuning.min_altitude && clamped.y <= tuning.max_altitude);
        assert_eq!((clamped.x, clamped.z), (position.x, position.z));
        assert_eq!((new_velocity.x, new_velocity.z), (velocity.x, velocity.z));

        if clamped.y >= tuning.max_altitude {
            assert!(new_velocity.y <= 0.0);
        }
        if clamped.y <= tuning.min_altitude {
            assert!(new_velocity.y >= 0.0);
        }
        if clamped.y > tuning.min_altitude && clamped.y < tuning.max_altitude {
            assert_eq!(new_velocity, velocity);
        }
    }
}

#[test]
fn test_chase_camera_settles_behind_any_pose() {
    let mut rng = ChaCha8Rng::seed_from_u64(59);
    let config = ChaseCameraConfig::default();

    for _ in 0..CASES / 4 {
        let target = Transform::from_translation(random_vec3(&mut rng, 100.0)).with_rotation(
            FlightState {
                yaw: rng.random_range(-180.0..180.0),
                pitch: rng.random_range(-80.0..80.0),
                visual_bank: 0.0,
            }
            .rotation(),
        );
        let mut camera = Transform::from_translation(random_vec3(&mut rng, 100.0));
        let mut chase = ChaseCamera::from_config(&config);

        for _ in 0..600 {
            camera = chase.follow(&camera, &target, DT);
        }

        let desired = chase.desired_position(&target);
        assert!((camera.translation - desired).length() < 1e-2);

        let to_look = (chase.look_point(&target) - camera.translation).normalize();
        assert!(camera.forward().dot(to_look) > 0.999);
    }
}

#[test]
fn test_lighting_toggle_sequences_end_on_last_command() {
    let mut rng = ChaCha8Rng::seed_from_u64(71);
    let presets = LightingPresets::from_config(&LightingConfig::default());
    let day = presets.get(TimeOfDay::Day).clone();
    let night = presets.get(TimeOfDay::Night).clone();
    let mut rig = LightingRig::new(presets, TimeOfDay::Day);

    for _ in 0..CASES {
        let at_night = rng.random_bool(0.5);
        if at_night {
            rig.set_night();
            assert_eq!(rig.current(), &night);
        } else {
            rig.set_day();
            assert_eq!(rig.current(), &day);
        }
    }

    rig.set_day();
    assert_eq!(rig.time_of_day(), TimeOfDay::Day);
    assert_eq!(rig.current(), &day);
}
