//! Planet surface and atmosphere construction.
//!
//! Rebuilds the static planet visuals whenever the body selection
//! changes: previous surface and shell entities are despawned before
//! the new ones are added, so repeated rebuilds for the same body never
//! accumulate duplicates. Runs only on selection change, never per
//! frame.

use bevy::math::primitives::Torus;
use bevy::prelude::*;

use crate::catalog::{profile, ActiveBody};

use super::features::{ground_color, surface_features, SurfaceFeature};

/// Planet sphere radius in render units. Large enough to read as a
/// curved horizon from the pad.
pub const SURFACE_RADIUS: f32 = 1000.0;

/// Planet sphere center. Sunk so its upper cap sits near the ground
/// plane around the launch pad.
pub const SURFACE_CENTER: Vec3 = Vec3::new(0.0, -950.0, 0.0);

/// Atmosphere shell radius, concentric with the surface sphere.
pub const ATMOSPHERE_RADIUS: f32 = 1200.0;

/// Marker component for the planet surface sphere (features included,
/// as children).
#[derive(Component)]
pub struct PlanetSurface;

/// Marker component for the translucent atmosphere shell.
#[derive(Component)]
pub struct AtmosphereShell;

/// (Re)build the planet visuals for the active body.
pub fn rebuild_surface(
    mut commands: Commands,
    active: Res<ActiveBody>,
    previous: Query<Entity, Or<(With<PlanetSurface>, With<AtmosphereShell>)>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !active.is_changed() {
        return;
    }

    for entity in &previous {
        commands.entity(entity).despawn();
    }

    let body = profile(active.0);

    // Surface sphere with its decorative features as children
    let surface_mesh = meshes.add(Sphere::new(SURFACE_RADIUS));
    let surface_material = materials.add(StandardMaterial {
        base_color: ground_color(active.0),
        perceptual_roughness: 0.95,
        ..default()
    });

    commands
        .spawn((
            Mesh3d(surface_mesh),
            MeshMaterial3d(surface_material),
            Transform::from_translation(SURFACE_CENTER),
            PlanetSurface,
        ))
        .with_children(|parent| {
            for feature in surface_features(active.0, SURFACE_RADIUS) {
                match feature {
                    SurfaceFeature::Patch {
                        direction,
                        radius,
                        color,
                    } => {
                        parent.spawn((
                            Mesh3d(meshes.add(Sphere::new(radius))),
                            MeshMaterial3d(materials.add(StandardMaterial {
                                base_color: color,
                                perceptual_roughness: 0.95,
                                ..default()
                            })),
                            // Embedded just below the surface so only a
                            // shallow dome shows
                            Transform::from_translation(
                                direction * (SURFACE_RADIUS - radius * 0.6),
                            ),
                        ));
                    }
                    SurfaceFeature::Band {
                        height,
                        half_thickness,
                        color,
                    } => {
                        let ring_radius =
                            (SURFACE_RADIUS * SURFACE_RADIUS - height * height).sqrt();
                        parent.spawn((
                            Mesh3d(meshes.add(Torus {
                                minor_radius: half_thickness,
                                major_radius: ring_radius,
                            })),
                            MeshMaterial3d(materials.add(StandardMaterial {
                                base_color: color,
                                perceptual_roughness: 0.9,
                                ..default()
                            })),
                            Transform::from_translation(Vec3::new(0.0, height, 0.0)),
                        ));
                    }
                }
            }
        });

    // Translucent atmosphere shell, visible from inside
    if let Some(atmosphere_color) = body.atmosphere_color {
        let shell_mesh = meshes.add(Sphere::new(ATMOSPHERE_RADIUS));
        let shell_material = materials.add(StandardMaterial {
            base_color: atmosphere_color.with_alpha(0.1),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        });
        commands.spawn((
            Mesh3d(shell_mesh),
            MeshMaterial3d(shell_material),
            Transform::from_translation(SURFACE_CENTER),
            AtmosphereShell,
        ));
    }

    info!("Rebuilt scene for {}", body.name);
}
