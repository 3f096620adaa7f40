//! Camera plugin - Self-contained plugin pattern
//!
//! Spawns the chase camera and moves it in `PostUpdate`, after the fixed
//! physics step and all `Update` work, so it always trails the pose the
//! target ended the frame with.

use crate::prelude::*;
use bevy::core_pipeline::bloom::Bloom;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::render::camera::Exposure;
use bevy::transform::TransformSystem;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChaseCameraSet;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            PostUpdate,
            ChaseCameraSet.before(TransformSystem::TransformPropagate),
        );
        app.add_systems(PostUpdate, follow_targets.in_set(ChaseCameraSet));
    }
}

/// Spawns the main camera trailing `target`.
pub fn spawn_chase_camera(commands: &mut Commands, target: Entity, config: &GameConfig) -> Entity {
    let chase = ChaseCamera::following(target, &config.camera);
    let start = Vec3::from_array(config.body.spawn_position) + Vec3::new(0.0, 1.0, 5.0);

    commands
        .spawn((
            Name::new("Main Camera"),
            Camera {
                hdr: true,
                ..default()
            },
            Camera3d::default(),
            Tonemapping::AcesFitted,
            Bloom::NATURAL,
            Exposure::default(),
            Transform::from_translation(start),
            chase,
        ))
        .id()
}

pub fn follow_targets(
    time: Res<Time>,
    mut cameras: Query<(&mut ChaseCamera, &mut Transform)>,
    targets: Query<&Transform, Without<ChaseCamera>>,
) {
    let dt = time.delta_secs();

    for (mut chase, mut transform) in &mut cameras {
        let Some(target) = chase.target else {
            continue;
        };
        let Ok(target_transform) = targets.get(target) else {
            continue;
        };

        *transform = chase.follow(&transform, target_transform, dt);
    }
}
