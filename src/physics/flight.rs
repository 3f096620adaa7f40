//! Flight control law
//!
//! Pure step functions that turn cached input samples into attitude, thrust,
//! velocity regulation and altitude bounds. Nothing here touches the ECS
//! world: systems in [`crate::plugins::flight`] read components, call these
//! functions with an explicit `dt` and write the results back.
//!
//! Angle conventions (degrees):
//! - positive yaw turns the nose to the right,
//! - positive pitch points the nose down,
//! - visual bank is a roll about the mounted model's corrected Z axis.

use crate::physics::math::{approach, approach_rotation, rotation_from_degrees};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Vertical look input counts half as much as horizontal input.
pub const PITCH_SENSITIVITY_SCALE: f32 = 0.5;

/// Tuning constants for a ship. Loaded from the `[flight]` config section.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FlightTuning {
    pub forward_thrust: f32,
    pub strafe_thrust: f32,
    pub max_speed: f32,
    pub look_sensitivity: f32,
    pub pitch_limit: f32,
    pub max_bank_angle: f32,
    pub min_altitude: f32,
    pub max_altitude: f32,
    pub deadzone: f32,
    /// Bank smoothing rate (1/s) while look input is active.
    pub bank_rate: f32,
    /// Bank smoothing rate (1/s) back to level when idle.
    pub bank_recovery_rate: f32,
    /// Blend rate (1/s) toward zero velocity when no thrust is applied.
    pub idle_drag: f32,
    /// Slerp rate (1/s) of the visual model toward its target tilt.
    pub tilt_rate: f32,
    /// Euler correction (degrees) between the model's authored axes and the ship.
    pub model_correction: [f32; 3],
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            forward_thrust: 25.0,
            strafe_thrust: 15.0,
            max_speed: 40.0,
            look_sensitivity: 2.0,
            pitch_limit: 80.0,
            max_bank_angle: 30.0,
            min_altitude: 5.0,
            max_altitude: 50.0,
            deadzone: 0.1,
            bank_rate: 8.0,
            bank_recovery_rate: 5.0,
            idle_drag: 0.5,
            tilt_rate: 10.0,
            model_correction: [-90.0, 0.0, 0.0],
        }
    }
}

impl FlightTuning {
    pub fn model_correction(&self) -> Quat {
        rotation_from_degrees(Vec3::from_array(self.model_correction))
    }
}

/// Input samples cached between physics ticks.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct FlightInput {
    /// Look delta; positive x is right, positive y is up.
    pub look: Vec2,
    /// Forward thrust amount, zero or positive.
    pub forward: f32,
    /// Strafe amount, positive to the right.
    pub strafe: f32,
}

impl FlightInput {
    pub fn is_looking(&self, deadzone: f32) -> bool {
        self.look.length() > deadzone
    }
}

/// Attitude and cosmetic bank of a ship.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct FlightState {
    pub yaw: f32,
    pub pitch: f32,
    pub visual_bank: f32,
}

impl FlightState {
    /// Recovers yaw and pitch from an existing world rotation. Roll is dropped.
    pub fn from_rotation(rotation: Quat) -> Self {
        let (yaw, pitch, _roll) = rotation.to_euler(EulerRot::YXZ);
        Self {
            yaw: -yaw.to_degrees(),
            pitch: -pitch.to_degrees(),
            visual_bank: 0.0,
        }
    }

    /// World rotation for the current attitude with zero roll.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            -self.yaw.to_radians(),
            -self.pitch.to_radians(),
            0.0,
        )
    }

    /// Applies one tick of look input.
    ///
    /// Attitude only changes while the look delta is outside the deadzone;
    /// the visual bank always moves, toward the banking target while looking
    /// and back to level otherwise.
    pub fn steer(&self, input: &FlightInput, tuning: &FlightTuning, dt: f32) -> Self {
        let mut next = *self;

        if input.is_looking(tuning.deadzone) {
            next.yaw += input.look.x * tuning.look_sensitivity;
            next.pitch -= input.look.y * tuning.look_sensitivity * PITCH_SENSITIVITY_SCALE;
            next.pitch = next.pitch.clamp(-tuning.pitch_limit, tuning.pitch_limit);
            next.visual_bank = approach(
                self.visual_bank,
                -input.look.x * tuning.max_bank_angle,
                tuning.bank_rate,
                dt,
            );
        } else {
            next.visual_bank = approach(self.visual_bank, 0.0, tuning.bank_recovery_rate, dt);
        }

        next
    }

    /// Thrust force for this tick, in world space.
    ///
    /// `rotation` is the ship's current world rotation, so steering must run
    /// first. The vertical term is applied regardless of forward input: a
    /// pitched ship always climbs or sinks.
    pub fn thrust(&self, input: &FlightInput, tuning: &FlightTuning, rotation: Quat) -> Vec3 {
        let mut thrust = Vec3::ZERO;

        if input.forward > tuning.deadzone {
            thrust += rotation * Vec3::NEG_Z * input.forward * tuning.forward_thrust;
        }

        if input.strafe.abs() > tuning.deadzone {
            thrust += rotation * Vec3::X * input.strafe * tuning.strafe_thrust;
        }

        thrust += Vec3::Y * -self.pitch.to_radians().sin() * tuning.forward_thrust;
        thrust
    }
}

/// Caps speed while thrusting, bleeds it off while idle.
pub fn regulate_velocity(velocity: Vec3, thrust: Vec3, tuning: &FlightTuning, dt: f32) -> Vec3 {
    if thrust.length() > tuning.deadzone {
        velocity.clamp_length_max(tuning.max_speed)
    } else {
        velocity.lerp(Vec3::ZERO, (tuning.idle_drag * dt).clamp(0.0, 1.0))
    }
}

/// Keeps a ship between the altitude floor and ceiling.
///
/// The position is clamped directly; vertical velocity pushing further out of
/// bounds is cancelled in the same tick.
pub fn clamp_altitude(position: Vec3, velocity: Vec3, tuning: &FlightTuning) -> (Vec3, Vec3) {
    let mut position = position;
    let mut velocity = velocity;

    position.y = position.y.clamp(tuning.min_altitude, tuning.max_altitude);

    if position.y >= tuning.max_altitude && velocity.y > 0.0 {
        velocity.y = 0.0;
    }
    if position.y <= tuning.min_altitude && velocity.y < 0.0 {
        velocity.y = 0.0;
    }

    (position, velocity)
}

/// Mounting of a visual model under a ship, captured once at startup.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct ModelMount {
    pub base: Quat,
    pub correction: Quat,
}

impl ModelMount {
    pub fn capture(initial_local_rotation: Quat, correction: Quat) -> Self {
        Self {
            base: initial_local_rotation,
            correction,
        }
    }

    /// Rest orientation of the model: authored rotation plus correction.
    pub fn rest(&self) -> Quat {
        self.base * self.correction
    }

    /// Rest orientation rolled by `bank` degrees.
    pub fn target(&self, bank: f32) -> Quat {
        self.rest() * Quat::from_rotation_z(bank.to_radians())
    }

    /// One tick of the visual tilt animation.
    pub fn tilt(&self, current: Quat, bank: f32, rate: f32, dt: f32) -> Quat {
        approach_rotation(current, self.target(bank), rate, dt)
    }
}
