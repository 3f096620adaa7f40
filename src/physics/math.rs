//! Smoothing helpers shared by the flight model and the chase camera.
//!
//! All functions take the elapsed time explicitly so they can be driven by
//! any schedule (fixed physics tick, variable frame tick, or a unit test).

use bevy::math::{Quat, Vec3};

/// Interpolation factor for an exponential approach at `rate` per second,
/// clamped to `[0, 1]` so large steps never overshoot.
#[inline]
pub fn rate_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

/// Moves `current` toward `target` by `rate * dt` of the remaining distance.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * rate_factor(rate, dt)
}

/// Spherical counterpart of [`approach`] for rotations.
#[inline]
pub fn approach_rotation(current: Quat, target: Quat, rate: f32, dt: f32) -> Quat {
    current.slerp(target, rate_factor(rate, dt))
}

/// Builds a rotation from Euler angles in degrees, applied roll first, then
/// pitch about X, then yaw about Y.
pub fn rotation_from_degrees(degrees: Vec3) -> Quat {
    Quat::from_euler(
        bevy::math::EulerRot::YXZ,
        degrees.y.to_radians(),
        degrees.x.to_radians(),
        degrees.z.to_radians(),
    )
}

/// Critically damped spring toward `target`.
///
/// Approximates the exact solution with the rational exponential from Game
/// Programming Gems 4 (ch. 1.10). `velocity` carries the spring state between
/// calls. The result never overshoots `target`; when it would, the position
/// snaps to the target and the velocity is reset accordingly.
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Overshoot check: if we crossed the target, clamp to it.
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_rate_factor_clamps() {
        assert_eq!(rate_factor(8.0, 0.02), 0.16);
        assert_eq!(rate_factor(8.0, 1.0), 1.0);
        assert_eq!(rate_factor(8.0, -1.0), 0.0);
    }

    #[test]
    fn test_approach_reaches_target_on_large_step() {
        assert_eq!(approach(10.0, 0.0, 5.0, 10.0), 0.0);
        let halfway = approach(10.0, 0.0, 5.0, 0.1);
        assert!((halfway - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_from_degrees_matches_axis_rotations() {
        let pitch_only = rotation_from_degrees(Vec3::new(-90.0, 0.0, 0.0));
        let expected = Quat::from_rotation_x((-90.0f32).to_radians());
        assert!(pitch_only.abs_diff_eq(expected, 1e-6));

        let mapped = pitch_only * Vec3::Y;
        assert!((mapped - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let target = Vec3::new(3.0, -2.0, 7.0);
        let mut position = Vec3::ZERO;
        let mut velocity = Vec3::ZERO;
        let start_distance = target.length();

        for _ in 0..600 {
            position = smooth_damp(position, target, &mut velocity, 0.2, DT);
            assert!((target - position).length() <= start_distance + 1e-4);
        }

        assert!((position - target).length() < 1e-3);
        assert!(velocity.length() < 1e-3);
    }

    #[test]
    fn test_smooth_damp_zero_dt_is_noop() {
        let mut velocity = Vec3::X;
        let position = smooth_damp(Vec3::ONE, Vec3::ZERO, &mut velocity, 0.5, 0.0);
        assert_eq!(position, Vec3::ONE);
        assert_eq!(velocity, Vec3::X);
    }

    #[test]
    fn test_smooth_damp_is_not_a_plain_lerp() {
        // A spring starting at rest accelerates: the first step covers less
        // distance than the second.
        let target = Vec3::new(10.0, 0.0, 0.0);
        let mut velocity = Vec3::ZERO;
        let first = smooth_damp(Vec3::ZERO, target, &mut velocity, 0.5, DT);
        let second = smooth_damp(first, target, &mut velocity, 0.5, DT);
        assert!(second.x - first.x > first.x);
    }
}
