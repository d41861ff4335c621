// src/gui/components/preview.rs
//
// Raw-markup preview of one archived page. The selector is bounded to
// the fixed page range, so an out-of-range page is unrepresentable.

use eframe::egui::{self, Color32, RichText, TextStyle};

use crate::config::consts::PAGE_COUNT;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    egui::CollapsingHeader::new("Raw page preview")
        .default_open(false)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Page:");
                ui.add(egui::Slider::new(
                    &mut app.state.gui.preview_page,
                    1..=PAGE_COUNT,
                ));
            });
            app.ensure_preview();

            match &app.preview {
                Some(markup) => {
                    egui::ScrollArea::vertical()
                        .id_salt("preview_scroll")
                        .max_height(240.0)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(markup.as_str())
                                    .text_style(TextStyle::Monospace),
                            );
                        });
                }
                None => {
                    ui.label(
                        RichText::new(format!(
                            "Page {} has not been archived yet.",
                            app.state.gui.preview_page
                        ))
                        .color(Color32::from_rgb(0xF0, 0xD2, 0x3C)),
                    );
                }
            }
        });
}
