//! Telemetry HUD showing live flight values.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::{profile, ActiveBody};
use crate::telemetry::Telemetry;

/// System that renders the telemetry HUD in the top-left corner.
pub fn telemetry_hud(
    mut contexts: EguiContexts,
    telemetry: Res<Telemetry>,
    active: Res<ActiveBody>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    egui::Window::new("Mission Telemetry")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
        .movable(false)
        .resizable(false)
        .collapsible(false)
        .frame(
            egui::Frame::NONE
                .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 200))
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            egui::Grid::new("telemetry_grid")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    readout(ui, "Velocity", format!("{:.1} m/s", telemetry.speed));
                    readout(ui, "Altitude", format!("{:.1} m", telemetry.altitude));
                    readout(ui, "Distance", format!("{:.1} m", telemetry.distance));
                    readout(ui, "Flight time", format!("{:.1} s", telemetry.time));
                });

            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "Surface gravity: {} m/s²",
                    profile(active.0).surface_gravity
                ))
                .small()
                .weak(),
            );
        });
}

fn readout(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(label);
    ui.label(egui::RichText::new(value).monospace());
    ui.end_row();
}
