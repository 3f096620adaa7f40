//! Centralized event definitions
//!
//! Lighting commands are written by the key bindings and applied by the
//! lighting plugin in the order they arrive.

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingCommand {
    SetDay,
    SetNight,
}
