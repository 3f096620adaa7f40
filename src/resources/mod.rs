use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

/// Camera and environment settings swapped together with a lighting preset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PostProcessProfile {
    pub exposure_ev100: f32,
    pub bloom_intensity: f32,
    pub ambient_brightness: f32,
}

impl Default for PostProcessProfile {
    fn default() -> Self {
        Self::day()
    }
}

impl PostProcessProfile {
    pub fn day() -> Self {
        Self {
            exposure_ev100: 13.0,
            bloom_intensity: 0.05,
            ambient_brightness: 400.0,
        }
    }

    pub fn night() -> Self {
        Self {
            exposure_ev100: 9.0,
            bloom_intensity: 0.3,
            ambient_brightness: 40.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    pub day_intensity: f32,
    pub night_intensity: f32,
    pub day_emission: f32,
    pub night_emission: f32,
    /// Sun illuminance in lux at intensity 1.0.
    pub sun_illuminance_scale: f32,
    pub day_profile: PostProcessProfile,
    pub night_profile: PostProcessProfile,
    /// Linear RGB of the window glow at emission strength 1.0.
    pub window_glow: [f32; 3],
    pub start_at_night: bool,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            day_intensity: 1.0,
            night_intensity: 0.1,
            day_emission: 0.2,
            night_emission: 3.0,
            sun_illuminance_scale: 10_000.0,
            day_profile: PostProcessProfile::day(),
            night_profile: PostProcessProfile::night(),
            window_glow: [1.0, 0.8, 0.45],
            start_at_night: false,
        }
    }
}

/// A complete set of lighting values applied in one go.
#[derive(Clone, Debug, PartialEq)]
pub struct LightingPreset {
    pub sun_intensity: f32,
    pub profile: PostProcessProfile,
    pub emission_strength: f32,
}

#[derive(Resource, Clone, Debug, PartialEq)]
pub struct LightingPresets {
    pub day: LightingPreset,
    pub night: LightingPreset,
}

impl LightingPresets {
    pub fn from_config(config: &LightingConfig) -> Self {
        Self {
            day: LightingPreset {
                sun_intensity: config.day_intensity,
                profile: config.day_profile.clone(),
                emission_strength: config.day_emission,
            },
            night: LightingPreset {
                sun_intensity: config.night_intensity,
                profile: config.night_profile.clone(),
                emission_strength: config.night_emission,
            },
        }
    }

    pub fn get(&self, time_of_day: TimeOfDay) -> &LightingPreset {
        match time_of_day {
            TimeOfDay::Day => &self.day,
            TimeOfDay::Night => &self.night,
        }
    }
}

/// Lighting values currently in effect. Systems mirror this into the world.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct LightingRig {
    presets: LightingPresets,
    time_of_day: TimeOfDay,
    current: LightingPreset,
}

impl LightingRig {
    pub fn new(presets: LightingPresets, time_of_day: TimeOfDay) -> Self {
        let current = presets.get(time_of_day).clone();
        Self {
            presets,
            time_of_day,
            current,
        }
    }

    pub fn set_day(&mut self) {
        self.apply(TimeOfDay::Day);
    }

    pub fn set_night(&mut self) {
        self.apply(TimeOfDay::Night);
    }

    pub fn apply(&mut self, time_of_day: TimeOfDay) {
        self.time_of_day = time_of_day;
        self.current = self.presets.get(time_of_day).clone();
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn current(&self) -> &LightingPreset {
        &self.current
    }
}

/// The emissive window material driven by the lighting presets.
#[derive(Resource, Clone, Debug)]
pub struct WindowGlow {
    pub material: Handle<StandardMaterial>,
    pub color: LinearRgba,
}

impl WindowGlow {
    pub fn emissive(&self, strength: f32) -> LinearRgba {
        LinearRgba::rgb(
            self.color.red * strength,
            self.color.green * strength,
            self.color.blue * strength,
        )
    }
}
