// src/gui/actions/scrape.rs
use std::{sync::mpsc, thread};

use crate::{
    gui::app::App,
    gui::progress::GuiProgress,
    scrape,
};

/// Kick off a full pipeline run on a worker thread. The pipeline itself
/// stays strictly sequential; the worker only exists so the UI can keep
/// painting while pages download. No cancellation mid-run.
pub fn scrape(app: &mut App) {
    if app.running {
        return;
    }
    app.running = true;
    app.status("Starting…");
    logf!("UI: SCRAPE clicked");

    let status = app.status.clone();
    let (tx, rx) = mpsc::channel();
    app.outcome = Some(rx);

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        // Box<dyn Error> is not Send; flatten to the display string here.
        let outcome = scrape::run(Some(&mut prog)).map_err(|e| e.to_string());
        if let Err(e) = &outcome {
            loge!("Scrape: run failed: {e}");
        }
        let _ = tx.send(outcome);
    });
}
