// src/gui/components/category_table.rs
//
// Category frequency breakdown: descending by count, ties in first-seen
// order. Collapsed by default so the movie table gets the space.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.categories.is_empty() {
        return;
    }

    egui::CollapsingHeader::new("Category breakdown")
        .default_open(false)
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .id_salt("category_table")
                .column(Column::initial(160.0).at_least(60.0).clip(true))
                .column(Column::initial(60.0))
                .header(20.0, |mut header| {
                    header.col(|ui| { ui.strong("Category"); });
                    header.col(|ui| { ui.strong("Count"); });
                })
                .body(|body| {
                    body.rows(18.0, app.categories.len(), |mut row| {
                        let (name, n) = &app.categories[row.index()];
                        row.col(|ui| { ui.label(name.as_str()); });
                        row.col(|ui| { ui.label(n.to_string()); });
                    });
                });
        });
}
