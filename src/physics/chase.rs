//! Chase camera rig
//!
//! Trails a target at an offset expressed in the target's local basis and
//! looks at a point ahead of it. Only the position is smoothed.

use crate::physics::math::smooth_damp;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ChaseCameraConfig {
    /// Offset in the target's basis: x right, y up, z forward.
    pub offset: [f32; 3],
    /// SmoothDamp time constant in seconds.
    pub smooth_time: f32,
    /// Distance ahead of the target the camera looks at.
    pub look_ahead: f32,
}

impl Default for ChaseCameraConfig {
    fn default() -> Self {
        Self {
            offset: [0.0, 1.0, -5.0],
            smooth_time: 10.0 / 60.0,
            look_ahead: 10.0,
        }
    }
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct ChaseCamera {
    pub target: Option<Entity>,
    pub offset: Vec3,
    pub smooth_time: f32,
    pub look_ahead: f32,
    /// SmoothDamp state.
    pub velocity: Vec3,
}

impl ChaseCamera {
    pub fn following(target: Entity, config: &ChaseCameraConfig) -> Self {
        Self {
            target: Some(target),
            ..Self::from_config(config)
        }
    }

    pub fn from_config(config: &ChaseCameraConfig) -> Self {
        Self {
            target: None,
            offset: Vec3::from_array(config.offset),
            smooth_time: config.smooth_time,
            look_ahead: config.look_ahead,
            velocity: Vec3::ZERO,
        }
    }

    /// Where the camera wants to be for a target in this pose.
    pub fn desired_position(&self, target: &Transform) -> Vec3 {
        target.translation
            + target.forward() * self.offset.z
            + target.up() * self.offset.y
            + target.right() * self.offset.x
    }

    pub fn look_point(&self, target: &Transform) -> Vec3 {
        target.translation + target.forward() * self.look_ahead
    }

    /// One late-frame step: smooth the position, then aim at the look point.
    pub fn follow(&mut self, camera: &Transform, target: &Transform, dt: f32) -> Transform {
        let desired = self.desired_position(target);
        let translation = smooth_damp(
            camera.translation,
            desired,
            &mut self.velocity,
            self.smooth_time,
            dt,
        );

        let mut next = camera.with_translation(translation);
        next.look_at(self.look_point(target), Vec3::Y);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_desired_position_uses_target_basis() {
        let camera = ChaseCamera::from_config(&ChaseCameraConfig::default());
        let target = Transform::from_xyz(1.0, 2.0, 3.0)
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));

        let desired = camera.desired_position(&target);
        let expected = target.translation + *target.up() * 1.0 - *target.forward() * 5.0;

        assert!((desired - expected).length() < 1e-5);
    }

    #[test]
    fn test_follow_converges_behind_stationary_target() {
        let mut camera = ChaseCamera::from_config(&ChaseCameraConfig::default());
        let target = Transform::from_xyz(0.0, 20.0, 0.0);
        let mut pose = Transform::from_xyz(30.0, 0.0, -40.0);

        for _ in 0..600 {
            pose = camera.follow(&pose, &target, DT);
        }

        let expected = Vec3::new(0.0, 21.0, 5.0);
        assert!((pose.translation - expected).length() < 1e-3);
        assert!(camera.velocity.length() < 1e-3);

        let facing = *pose.forward();
        let to_look_point = (camera.look_point(&target) - pose.translation).normalize();
        assert!((facing - to_look_point).length() < 1e-4);
    }

    #[test]
    fn test_orientation_is_not_smoothed() {
        let mut camera = ChaseCamera::from_config(&ChaseCameraConfig::default());
        let target = Transform::from_xyz(0.0, 10.0, 0.0);
        let pose = camera.follow(&Transform::from_xyz(50.0, 10.0, 50.0), &target, DT);

        let to_look_point = (camera.look_point(&target) - pose.translation).normalize();
        assert!((*pose.forward() - to_look_point).length() < 1e-4);
    }
}
