//! Rendering systems for the launch visualization.
//!
//! Builds the static scene (planet surface, atmosphere shell, starfield,
//! lighting), decorates the projectile, and mirrors physics state into
//! render transforms each frame.

mod background;
mod features;
mod surface;
mod sync;

use bevy::prelude::*;

use crate::catalog::ActiveBody;
use crate::types::{Projectile, ProjectileState, LAUNCH_POSITION, PROJECTILE_RADIUS};

use self::background::{rotate_starfield, spawn_lighting, spawn_starfield};
pub use self::features::{surface_features, SurfaceFeature};
pub use self::surface::{rebuild_surface, AtmosphereShell, PlanetSurface};
use self::sync::sync_projectile_transform;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveBody>()
            .add_systems(Startup, (spawn_starfield, spawn_lighting))
            .add_systems(
                Update,
                (
                    rebuild_surface,
                    decorate_projectile,
                    sync_projectile_transform,
                    rotate_starfield,
                ),
            );
    }
}

/// Attach the visual components to the projectile physics entity.
///
/// The physics layer spawns the bare entity so it stays testable without
/// a display surface; this runs once, as soon as that entity exists.
fn decorate_projectile(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    undecorated: Query<Entity, (With<Projectile>, With<ProjectileState>, Without<Mesh3d>)>,
) {
    let Ok(entity) = undecorated.single() else {
        return;
    };

    let mesh = meshes.add(Sphere::new(PROJECTILE_RADIUS));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xFF, 0xD7, 0x00),
        metallic: 0.7,
        perceptual_roughness: 0.25,
        ..default()
    });

    commands.entity(entity).insert((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_translation(LAUNCH_POSITION.as_vec3()),
    ));
    info!("Projectile visual attached");
}
