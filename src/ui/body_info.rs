//! Info card for the active celestial body.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::{profile, ActiveBody};

/// System that renders the body info card in the top-right corner.
pub fn body_info_card(mut contexts: EguiContexts, active: Res<ActiveBody>) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    let body = profile(active.0);

    egui::Window::new(body.name)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .movable(false)
        .resizable(false)
        .collapsible(false)
        .frame(
            egui::Frame::NONE
                .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 200))
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            egui::Grid::new("body_info_grid")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    row(ui, "Radius", format!("{:.0} km", body.radius_km));
                    row(ui, "Gravity", format!("{} m/s²", body.surface_gravity));
                    row(
                        ui,
                        "Atmosphere",
                        if body.has_atmosphere() {
                            format!("{} kg/m³", body.atmosphere_density)
                        } else {
                            "None".to_string()
                        },
                    );
                });
        });
}

fn row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(label);
    ui.label(egui::RichText::new(value).monospace());
    ui.end_row();
}
