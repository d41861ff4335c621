// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    scrape::RunReport,
    stats::{self, Summary},
    store::{self, DataSet},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Movie Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // presentation state, reloaded wholesale from disk
    pub dataset: Option<DataSet>,
    pub summary: Option<Result<Summary, String>>,
    pub categories: Vec<(String, usize)>,

    // raw-markup preview cache for the currently selected page
    pub preview: Option<String>,
    preview_loaded: Option<u32>,

    // status/progress (the worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // outcome channel of the in-flight scrape worker, if any
    pub outcome: Option<mpsc::Receiver<Result<RunReport, String>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            dataset: None,
            summary: None,
            categories: Vec::new(),
            preview: None,
            preview_loaded: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            outcome: None,
        };

        app.reload_from_disk();
        match &app.dataset {
            Some(ds) => {
                logf!("Init: loaded dataset (rows={})", ds.row_count());
                app.status("Loaded local data");
            }
            None => logd!("Init: no dataset artifact yet"),
        }
        app
    }

    /// Drop all presentation state and rebuild it from the artifacts.
    pub fn reload_from_disk(&mut self) {
        self.dataset = store::load_dataset();
        self.summary = self.dataset.as_ref().map(|ds| {
            stats::summarize(ds).map_err(|e| e.to_string())
        });
        self.categories = self
            .dataset
            .as_ref()
            .map(stats::category_counts)
            .unwrap_or_default();
        self.preview_loaded = None;
    }

    /// Make sure the preview cache matches the selected page.
    pub fn ensure_preview(&mut self) {
        let page = self.state.gui.preview_page;
        if self.preview_loaded != Some(page) {
            self.preview = store::load_page(page);
            self.preview_loaded = Some(page);
            logd!("UI: preview page {page} ({})",
                if self.preview.is_some() { "found" } else { "missing" });
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Collect the outcome of a finished scrape worker, if one arrived.
    fn poll_worker(&mut self) {
        let Some(rx) = &self.outcome else { return };
        match rx.try_recv() {
            Ok(Ok(report)) => {
                self.running = false;
                self.outcome = None;
                self.reload_from_disk();
                match report.dataset {
                    Some(path) => self.status(format!(
                        "Saved {} record(s) → {}", report.records, path.display())),
                    None => self.status("No records extracted; previous dataset kept"),
                }
            }
            Ok(Err(e)) => {
                self.running = false;
                self.outcome = None;
                // Pages fetched before the failure were already archived;
                // show them without pretending the run succeeded.
                self.reload_from_disk();
                self.status(format!("Error: {e}"));
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.running = false;
                self.outcome = None;
                loge!("UI: scrape worker vanished without reporting");
                self.status("Error: scrape worker died");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        if self.running {
            // keep the spinner moving and the channel polled
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::action_buttons::draw(ui, self);
            ui.separator();

            crate::gui::components::metrics_row::draw(ui, self);
            ui.separator();

            crate::gui::components::category_table::draw(ui, self);

            crate::gui::components::movie_table::draw(ui, self);

            crate::gui::components::preview::draw(ui, self);
        });
    }
}
