// src/gui/components/metrics_row.rs
//
// Summary metrics over the loaded dataset: record count, average score,
// distinct category count. A non-numeric score fails the whole summary;
// the error shows here while the table below still renders.

use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(summary) = &app.summary else {
        ui.label(
            RichText::new("No dataset yet — hit SCRAPE to fetch the listings.")
                .color(Color32::from_rgb(0xF0, 0xD2, 0x3C)),
        );
        return;
    };

    match summary {
        Ok(sum) => {
            ui.horizontal(|ui| {
                metric(ui, "Movies", &sum.count.to_string());
                ui.separator();
                let avg = match sum.avg_score {
                    Some(v) => format!("{v:.2}"),
                    None => s!("n/a"),
                };
                metric(ui, "Average score", &avg);
                ui.separator();
                metric(ui, "Distinct categories", &sum.distinct_categories.to_string());
            });
        }
        Err(e) => {
            ui.label(
                RichText::new(format!("Summary unavailable: {e}"))
                    .color(Color32::from_rgb(0xDC, 0x61, 0x49)),
            );
        }
    }
}

fn metric(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(format!("{label}:"));
    ui.label(RichText::new(value).strong());
}
