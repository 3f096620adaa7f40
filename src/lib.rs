//! Skyship library
//!
//! This provides the flight, camera and lighting logic of skyship as a
//! library to enable integration testing.

pub mod cli;
pub mod components;
pub mod config;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;

// Test utilities are public for integration tests
pub mod test_utils;
