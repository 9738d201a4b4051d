//! UI module providing the egui-based mission control interface.

mod body_info;
mod controls;
mod telemetry_panel;

pub use self::controls::commit_selection;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::physics::{LaunchEvent, ResetEvent};
use crate::types::{FlightState, MAX_LAUNCH_ANGLE, MAX_LAUNCH_SPEED, MIN_LAUNCH_ANGLE, MIN_LAUNCH_SPEED};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .add_systems(Update, keyboard_shortcuts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    controls::control_dock,
                    telemetry_panel::telemetry_hud,
                    body_info::body_info_card,
                ),
            );
    }
}

/// Slider state for the launch parameters.
#[derive(Resource)]
pub struct UiState {
    /// Launch velocity magnitude in m/s.
    pub speed: f64,
    /// Launch angle in degrees above the horizon.
    pub angle_deg: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            speed: 75.0,
            angle_deg: 45.0,
        }
    }
}

impl UiState {
    /// Clamp sliders to their widget ranges.
    pub fn clamped(&self) -> (f64, f64) {
        (
            self.speed.clamp(MIN_LAUNCH_SPEED, MAX_LAUNCH_SPEED),
            self.angle_deg.clamp(MIN_LAUNCH_ANGLE, MAX_LAUNCH_ANGLE),
        )
    }
}

/// Handle keyboard shortcuts: Space launches, R resets.
fn keyboard_shortcuts(
    mut contexts: EguiContexts,
    keys: Res<ButtonInput<KeyCode>>,
    ui_state: Res<UiState>,
    flight: Res<FlightState>,
    mut launches: MessageWriter<LaunchEvent>,
    mut resets: MessageWriter<ResetEvent>,
) {
    // Leave the keys alone while an egui widget has keyboard focus
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if keys.just_pressed(KeyCode::Space) && !flight.active {
        let (speed, angle_deg) = ui_state.clamped();
        launches.write(LaunchEvent { speed, angle_deg });
    }

    if keys.just_pressed(KeyCode::KeyR) {
        resets.write(ResetEvent);
    }
}
