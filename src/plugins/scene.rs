//! Scene plugin - Self-contained plugin pattern
//!
//! Builds the flying field: ground, a grid of lit buildings, the sun, the
//! player's ship and the chase camera behind it.

use crate::plugins::camera::spawn_chase_camera;
use crate::prelude::*;
use std::f32::consts::FRAC_PI_2;

const BUILDING_GRID: i32 = 4;
const BUILDING_SPACING: f32 = 24.0;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>();
        app.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.05)));
        app.init_resource::<AmbientLight>();
        app.add_systems(Startup, (spawn_environment, spawn_player).chain());
    }
}

pub fn spawn_environment(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(400.0, 400.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.18, 0.22, 0.16))),
        Transform::IDENTITY,
    ));

    commands.spawn((
        Name::new("Sun"),
        Sun,
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(50.0, 120.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let window_color = Vec3::from_array(config.lighting.window_glow);
    let window_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.9, 0.85, 0.6),
        emissive: LinearRgba::BLACK,
        ..default()
    });
    commands.insert_resource(WindowGlow {
        material: window_material.clone(),
        color: LinearRgba::rgb(window_color.x, window_color.y, window_color.z),
    });

    let wall_material = materials.add(Color::srgb(0.45, 0.45, 0.5));
    let window_mesh = meshes.add(Cuboid::new(2.0, 1.5, 0.1));

    for gx in -BUILDING_GRID..BUILDING_GRID {
        for gz in -BUILDING_GRID..BUILDING_GRID {
            let height = 8.0 + ((gx * 7 + gz * 13).rem_euclid(5) as f32) * 6.0;
            let origin = Vec3::new(
                (gx as f32 + 0.5) * BUILDING_SPACING,
                height / 2.0,
                (gz as f32 + 0.5) * BUILDING_SPACING,
            );

            commands
                .spawn((
                    Name::new(format!("Building {gx},{gz}")),
                    Mesh3d(meshes.add(Cuboid::new(10.0, height, 10.0))),
                    MeshMaterial3d(wall_material.clone()),
                    Transform::from_translation(origin),
                ))
                .with_children(|building| {
                    let rows = (height / 4.0) as i32;
                    for row in 0..rows {
                        let y = -height / 2.0 + 2.5 + row as f32 * 4.0;
                        for x in [-2.5, 2.5] {
                            building.spawn((
                                Mesh3d(window_mesh.clone()),
                                MeshMaterial3d(window_material.clone()),
                                Transform::from_xyz(x, y, 5.05),
                            ));
                        }
                    }
                });
        }
    }

    info!(
        "Spawned {} buildings",
        (BUILDING_GRID * 2) * (BUILDING_GRID * 2)
    );
}

/// Spawns the ship with its hull as an explicitly named child, then the camera.
///
/// The hull mesh points along +Z and is stood up by its local rotation, the
/// way an imported model often arrives; the controller's model correction
/// lays it back down.
pub fn spawn_player(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let hull_mesh = meshes.add(
        Mesh::from(Cone {
            radius: 0.6,
            height: 2.4,
        })
        .rotated_by(Quat::from_rotation_x(FRAC_PI_2)),
    );
    let hull_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.7, 0.75, 0.85),
        metallic: 0.6,
        perceptual_roughness: 0.3,
        ..default()
    });

    let hull = commands
        .spawn((
            Name::new("Hull"),
            Mesh3d(hull_mesh),
            MeshMaterial3d(hull_material),
            Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        ))
        .id();

    let spawn = Transform::from_translation(Vec3::from_array(config.body.spawn_position));
    let ship = commands
        .spawn(ShipBundle::new(spawn, &config).with_model(hull))
        .add_child(hull)
        .id();

    spawn_chase_camera(&mut commands, ship, &config);
}
