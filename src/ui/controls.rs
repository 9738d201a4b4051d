//! Mission control dock: body selector, launch sliders, and buttons.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::{profile, ActiveBody, BodyId};
use crate::physics::{LaunchEvent, ResetEvent};
use crate::types::{
    FlightState, MAX_LAUNCH_ANGLE, MAX_LAUNCH_SPEED, MIN_LAUNCH_ANGLE, MIN_LAUNCH_SPEED,
};

use super::UiState;

/// System that renders the bottom control dock.
pub fn control_dock(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut active: ResMut<ActiveBody>,
    flight: Res<FlightState>,
    mut launches: MessageWriter<LaunchEvent>,
    mut resets: MessageWriter<ResetEvent>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    // The widgets work on a staged local; mutably borrowing `active`
    // every frame would trip change detection with nothing picked.
    let mut selection = active.0;

    egui::TopBottomPanel::bottom("control_dock")
        .frame(
            egui::Frame::NONE
                .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 16.0;

                render_body_selector(ui, &mut selection);
                ui.separator();
                render_sliders(ui, &mut ui_state);
                ui.separator();
                render_buttons(ui, &ui_state, &flight, &mut launches, &mut resets);
            });
        });

    commit_selection(&mut active, selection);
}

/// Write a staged selection back into `ActiveBody`.
///
/// Writes only on an actual change: a per-frame mutable deref would mark
/// the resource changed, retriggering the scene rebuild and the
/// body-change reset every frame.
pub fn commit_selection(active: &mut ResMut<ActiveBody>, selection: BodyId) {
    if selection != active.0 {
        active.0 = selection;
    }
}

/// Body selector with flavor text underneath.
fn render_body_selector(ui: &mut egui::Ui, selection: &mut BodyId) {
    ui.vertical(|ui| {
        ui.label("Target body");
        egui::ComboBox::from_id_salt("body_select")
            .selected_text(profile(*selection).name)
            .show_ui(ui, |ui| {
                for &id in BodyId::ALL {
                    ui.selectable_value(selection, id, profile(id).name);
                }
            });
        ui.label(
            egui::RichText::new(profile(*selection).description)
                .small()
                .weak(),
        );
    });
}

fn render_sliders(ui: &mut egui::Ui, ui_state: &mut UiState) {
    ui.vertical(|ui| {
        ui.label(format!("Launch velocity: {:.0} m/s", ui_state.speed));
        ui.add(
            egui::Slider::new(&mut ui_state.speed, MIN_LAUNCH_SPEED..=MAX_LAUNCH_SPEED)
                .step_by(1.0)
                .fixed_decimals(0)
                .suffix(" m/s"),
        );
    });

    ui.vertical(|ui| {
        ui.label(format!("Launch angle: {:.0}°", ui_state.angle_deg));
        ui.add(
            egui::Slider::new(&mut ui_state.angle_deg, MIN_LAUNCH_ANGLE..=MAX_LAUNCH_ANGLE)
                .step_by(1.0)
                .fixed_decimals(0)
                .suffix("°"),
        );
    });
}

fn render_buttons(
    ui: &mut egui::Ui,
    ui_state: &UiState,
    flight: &FlightState,
    launches: &mut MessageWriter<LaunchEvent>,
    resets: &mut MessageWriter<ResetEvent>,
) {
    // Launch is disabled mid-flight; the physics operation itself would
    // accept a relaunch, the widget just prevents accidental ones.
    if ui
        .add_enabled(!flight.active, egui::Button::new("Launch"))
        .on_hover_text("Launch (Space)")
        .clicked()
    {
        let (speed, angle_deg) = ui_state.clamped();
        launches.write(LaunchEvent { speed, angle_deg });
    }

    if ui
        .button("Reset")
        .on_hover_text("Reset projectile (R)")
        .clicked()
    {
        resets.write(ResetEvent);
    }
}
