// src/scrape.rs

// Pipeline driver: fetch pages 1..N strictly in order, archive each,
// extract, then persist the aggregate. Any fetch or write error aborts
// the whole run before the dataset is touched.

use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::consts::PAGE_COUNT,
    core::fetch::SessionManager,
    progress::Progress,
    specs::movies::{self, MovieRecord},
    store::{self, DataSet},
};

/// What a completed run produced.
pub struct RunReport {
    pub pages: u32,
    pub records: usize,
    /// Where the dataset was written; `None` when the run extracted
    /// nothing and the previous artifact was left in place.
    pub dataset: Option<PathBuf>,
}

pub fn run(mut progress: Option<&mut dyn Progress>) -> Result<RunReport, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(PAGE_COUNT as usize);
    }
    logf!("Scrape: Begin pages 1..{PAGE_COUNT}");

    let mut session = SessionManager::new()?;
    let mut records: Vec<MovieRecord> = Vec::new();

    for page in 1..=PAGE_COUNT {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching page {page}/{PAGE_COUNT}…"));
        }
        let markup = session.fetch_page(page)?;
        let archived = store::save_page(page, &markup)?;
        logd!("Scrape: Archived page {page} → {}", archived.display());

        let mut found = movies::extract(&markup);
        logf!("Scrape: Page {page}: {} record(s)", found.len());
        records.append(&mut found);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(page);
        }
    }

    let ds = to_dataset(&records);
    let dataset = store::save_dataset(&ds)?;
    match &dataset {
        Some(path) => logf!("Scrape: Saved {} record(s) → {}", ds.row_count(), path.display()),
        None => loge!("Scrape: No records extracted; previous dataset kept"),
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunReport { pages: PAGE_COUNT, records: records.len(), dataset })
}

/// Shape extracted records into the canonical dataset.
pub fn to_dataset(records: &[MovieRecord]) -> DataSet {
    DataSet {
        headers: Some(movies::headers()),
        rows: records.iter().map(MovieRecord::to_row).collect(),
    }
}
