//! Lighting plugin - Self-contained plugin pattern
//!
//! Swaps between the day and night presets. Key presses become
//! [`LightingCommand`] events, commands update the [`LightingRig`], and a
//! final system copies the rig into the sun, camera and window material.
//! Presets apply instantly; there is no blending.

use crate::prelude::*;
use bevy::core_pipeline::bloom::Bloom;
use bevy::render::camera::Exposure;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LightingSet {
    Input,
    Apply,
    Sync,
}

pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        // Falls back to defaults so the systems below always find a config.
        app.init_resource::<GameConfig>();
        let config = app.world().resource::<GameConfig>().clone();
        let time_of_day = if config.lighting.start_at_night {
            TimeOfDay::Night
        } else {
            TimeOfDay::Day
        };

        app.insert_resource(LightingRig::new(
            LightingPresets::from_config(&config.lighting),
            time_of_day,
        ));
        app.add_event::<LightingCommand>();

        app.configure_sets(
            Update,
            (LightingSet::Input, LightingSet::Apply, LightingSet::Sync).chain(),
        );
        app.add_systems(
            Update,
            (
                lighting_keys.in_set(LightingSet::Input),
                apply_lighting_commands.in_set(LightingSet::Apply),
                sync_lighting.in_set(LightingSet::Sync),
            ),
        );
    }
}

pub fn lighting_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: EventWriter<LightingCommand>,
) {
    if keys.just_pressed(KeyCode::Numpad1) {
        commands.write(LightingCommand::SetNight);
    }
    if keys.just_pressed(KeyCode::Numpad2) {
        commands.write(LightingCommand::SetDay);
    }
}

pub fn apply_lighting_commands(
    mut commands: EventReader<LightingCommand>,
    mut rig: ResMut<LightingRig>,
) {
    for command in commands.read() {
        match command {
            LightingCommand::SetNight => rig.set_night(),
            LightingCommand::SetDay => rig.set_day(),
        }
        debug!("Lighting switched to {:?}", rig.time_of_day());
    }
}

/// Mirrors the rig into the world. Runs on the first frame and whenever the
/// rig changes, so late-spawned lights and cameras pick up the preset too.
pub fn sync_lighting(
    rig: Res<LightingRig>,
    config: Res<GameConfig>,
    window_glow: Option<Res<WindowGlow>>,
    mut ambient: Option<ResMut<AmbientLight>>,
    mut materials: Option<ResMut<Assets<StandardMaterial>>>,
    mut suns: Query<&mut DirectionalLight, With<Sun>>,
    mut cameras: Query<(Option<&mut Exposure>, Option<&mut Bloom>), With<Camera3d>>,
    added: Query<(), Or<(Added<Sun>, Added<Camera3d>)>>,
) {
    if !rig.is_changed() && added.is_empty() {
        return;
    }

    let preset = rig.current();

    for mut light in &mut suns {
        light.illuminance = preset.sun_intensity * config.lighting.sun_illuminance_scale;
    }

    for (exposure, bloom) in &mut cameras {
        if let Some(mut exposure) = exposure {
            exposure.ev100 = preset.profile.exposure_ev100;
        }
        if let Some(mut bloom) = bloom {
            bloom.intensity = preset.profile.bloom_intensity;
        }
    }

    if let Some(ambient) = ambient.as_mut() {
        ambient.brightness = preset.profile.ambient_brightness;
    }

    if let (Some(glow), Some(materials)) = (window_glow, materials.as_mut()) {
        if let Some(material) = materials.get_mut(&glow.material) {
            material.emissive = glow.emissive(preset.emission_strength);
        }
    }

    info!(
        "Applied {:?} lighting: sun intensity {}, emission {}",
        rig.time_of_day(),
        preset.sun_intensity,
        preset.emission_strength
    );
}
