//! Ballista - Planetary Launch Simulator
//!
//! A library crate providing the projectile simulation components
//! for testing and integration purposes.

pub mod camera;
pub mod catalog;
pub mod physics;
pub mod render;
pub mod telemetry;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
