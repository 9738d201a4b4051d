//! Ballista - Planetary Launch Simulator
//!
//! A desktop application for launching a projectile across several
//! celestial bodies, with live telemetry and ballistic drag.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use ballista::camera::CameraPlugin;
use ballista::physics::PhysicsPlugin;
use ballista::render::RenderPlugin;
use ballista::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin::default())
        .add_plugins((PhysicsPlugin, CameraPlugin, RenderPlugin, UiPlugin))
        .run();
}
