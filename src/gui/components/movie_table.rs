// src/gui/components/movie_table.rs
//
// Draws the dataset table. Headers come from the artifact when present,
// otherwise from the fixed column order. Purely a view.

use eframe::egui::{self, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::specs::movies;

// Initial widths per column: Title, Score, Categories, Region, Runtime,
// ReleaseDate.
const COL_WIDTHS: [f32; 6] = [200.0, 50.0, 140.0, 160.0, 90.0, 140.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(ds) = &app.dataset else { return };

    let headers = ds.headers.clone().unwrap_or_else(movies::headers);
    let cols = headers.len().max(1);

    let avail_h = (ui.available_height() - 180.0).max(120.0);
    egui::ScrollArea::horizontal()
        .id_salt("movie_table_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .id_salt("movie_table")
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for ci in 0..cols {
                let w = COL_WIDTHS.get(ci).copied().unwrap_or(80.0);
                table = table.column(
                    Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in &headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.strong(h.as_str());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, ds.rows.len(), |mut row| {
                        let data = &ds.rows[row.index()];
                        for ci in 0..cols {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if let Some(cell) = data.get(ci) {
                                    ui.label(cell.as_str());
                                }
                            });
                        }
                    });
                });
        });
}
