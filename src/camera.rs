//! Camera rig for the launch visualization.
//!
//! Pointer drag shifts the camera laterally and re-aims it at the
//! origin (a positional offset, not a rotational orbit), and the scroll
//! wheel zooms by rescaling the camera's distance from the origin
//! within a clamped range.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};

/// Initial camera position: above and behind the pad.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 100.0, 300.0);

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

/// Near/far clip planes. Far must reach past the starfield shells.
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 50_000.0;

/// Pointer-drag sensitivity in render units per pixel.
pub const DRAG_SPEED: f32 = 0.5;

/// Zoom factor applied per wheel tick.
pub const ZOOM_SPEED: f32 = 0.1;

/// Zoom clamp: distance from the origin stays within these bounds.
pub const MIN_DISTANCE: f32 = 50.0;
pub const MAX_DISTANCE: f32 = 2000.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera setup and pointer controls.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_drag, camera_zoom));
    }
}

/// Spawn the main perspective camera looking at the pad.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
        // Dim ambient fill; the directional lights carry the scene
        AmbientLight {
            color: Color::WHITE,
            brightness: 80.0,
            ..default()
        },
        MainCamera,
    ));
}

/// Shift the camera position by a pointer delta and re-aim at the origin.
///
/// Positive screen-y motion moves the camera down, following the usual
/// pointer convention.
pub fn drag_offset(position: Vec3, delta: Vec2) -> Vec3 {
    position + Vec3::new(delta.x * DRAG_SPEED, -delta.y * DRAG_SPEED, 0.0)
}

/// Scale the camera position by one wheel tick and clamp its distance
/// from the origin to `[MIN_DISTANCE, MAX_DISTANCE]` by rescaling the
/// position vector to the nearest bound when exceeded.
pub fn zoom_position(position: Vec3, scroll: f32) -> Vec3 {
    let factor = 1.0 - scroll.signum() * ZOOM_SPEED;
    let scaled = position * factor;
    let distance = scaled.length();
    if distance <= f32::EPSILON {
        return scaled;
    }
    if distance < MIN_DISTANCE {
        scaled * (MIN_DISTANCE / distance)
    } else if distance > MAX_DISTANCE {
        scaled * (MAX_DISTANCE / distance)
    } else {
        scaled
    }
}

/// Handle primary-button drag.
fn camera_drag(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !mouse_buttons.pressed(MouseButton::Left) {
        return;
    }
    if mouse_motion.delta == Vec2::ZERO {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    transform.translation = drag_offset(transform.translation, mouse_motion.delta);
    transform.look_at(Vec3::ZERO, Vec3::Y);
}

/// Handle scroll-wheel zoom.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    transform.translation = zoom_position(transform.translation, mouse_scroll.delta.y);
}
