//! Starfield and lighting for the scene background.

use bevy::prelude::*;
use rand::Rng;

/// Slow drift of the starfield, radians per frame about +Y.
const STAR_ROTATION_RATE: f32 = 0.0001;

/// Star count, shell radius, and base size for each starfield layer.
const STAR_LAYERS: &[(usize, f32, f32)] = &[(600, 4000.0, 4.0), (300, 6000.0, 6.0), (100, 8000.0, 10.0)];

/// Marker component for the starfield root entity.
#[derive(Component)]
pub struct Starfield;

/// Spawn layered background stars under a single rotating root.
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_mesh = meshes.add(Sphere::new(1.0));
    let mut rng = rand::thread_rng();

    let mut star_material = |color: Color| {
        materials.add(StandardMaterial {
            base_color: color,
            emissive: color.to_linear() * 0.5,
            unlit: true,
            ..default()
        })
    };
    let palette = [
        star_material(Color::WHITE),
        star_material(Color::srgb(0.8, 0.9, 1.0)),
        star_material(Color::srgb(1.0, 1.0, 0.8)),
        star_material(Color::srgb(1.0, 0.8, 0.8)),
    ];

    let mut total = 0;
    commands
        .spawn((Starfield, Transform::default(), Visibility::default()))
        .with_children(|parent| {
            for &(count, shell_radius, base_size) in STAR_LAYERS {
                for _ in 0..count {
                    // Random point on a jittered sphere shell
                    let theta = rng.gen_range(0.0..std::f32::consts::TAU);
                    let phi = (rng.gen_range(-1.0f32..1.0)).acos();
                    let radius = shell_radius + rng.gen_range(0.0..1000.0);
                    let position = Vec3::new(
                        radius * phi.sin() * theta.cos(),
                        radius * phi.sin() * theta.sin(),
                        radius * phi.cos(),
                    );

                    // Mostly white, with blue, yellow, and red outliers
                    let material = match rng.gen_range(0.0f32..1.0) {
                        c if c < 0.70 => palette[0].clone(),
                        c if c < 0.85 => palette[1].clone(),
                        c if c < 0.95 => palette[2].clone(),
                        _ => palette[3].clone(),
                    };

                    let scale = base_size * rng.gen_range(0.5..1.5);
                    parent.spawn((
                        Mesh3d(star_mesh.clone()),
                        MeshMaterial3d(material),
                        Transform::from_translation(position).with_scale(Vec3::splat(scale)),
                    ));
                }
                total += count;
            }
        });

    info!("Spawned {} background stars", total);
}

/// Drift the starfield slowly around the vertical axis.
pub fn rotate_starfield(mut query: Query<&mut Transform, With<Starfield>>) {
    for mut transform in query.iter_mut() {
        transform.rotate_y(STAR_ROTATION_RATE);
    }
}

/// Spawn scene lighting: a warm key light with shadows and a cool rim
/// light. Ambient fill rides on the camera entity.
pub fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            color: Color::srgb_u8(0xFF, 0xFF, 0xCC),
            illuminance: 5000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(500.0, 800.0, 300.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            color: Color::srgb_u8(0x87, 0xCE, 0xEB),
            illuminance: 1500.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-500.0, 200.0, -300.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Scene lighting initialized");
}
