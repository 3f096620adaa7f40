//! Skyship prelude module
//!
//! This module re-exports the most commonly used types across the game to
//! reduce import boilerplate.

// External crate re-exports
pub use avian3d::prelude::*;
pub use bevy::prelude::*;

// Internal re-exports - Config
pub use crate::config::GameConfig;

// Internal re-exports - Components
pub use crate::components::{FlightController, MountedModel, ShipBundle, Sun};

// Internal re-exports - Physics
pub use crate::physics::chase::{ChaseCamera, ChaseCameraConfig};
pub use crate::physics::flight::{FlightInput, FlightState, FlightTuning};

// Internal re-exports - Resources
pub use crate::resources::{LightingConfig, LightingPresets, LightingRig, TimeOfDay, WindowGlow};

// Internal re-exports - Events
pub use crate::events::LightingCommand;
