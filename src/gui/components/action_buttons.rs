// src/gui/components/action_buttons.rs

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        // Scrape
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_scrape = ui.add_enabled(
            !app.running,
            egui::Button::new(
                egui::RichText::new("SCRAPE")
                .color(black)
                .strong())
            .fill(red));

        if button_scrape.clicked() {
            actions::scrape(app);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        // Open store folder
        if ui.button("📁").on_hover_text("Open store folder").clicked() {
            actions::open_store(app);
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(status);
    });
}
