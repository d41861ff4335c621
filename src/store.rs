// src/store.rs

// On-disk artifact layer. Everything a run produces lives under
// `.store/`: the dataset CSV and one archived markup file per page.
// The `_in` variants take an explicit root so tests can point them at
// a temp directory; the plain functions use the fixed store location.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{DATASET_FILE, PAGES_SUBDIR, STORE_DIR, STORE_SEP};
use crate::csv::{detect_headers, parse_rows, rows_to_string};
use crate::file::ensure_directory;

pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map_or(0, |h| h.len())
    }
}

pub fn store_dir() -> PathBuf {
    PathBuf::from(STORE_DIR)
}

fn page_file(page: u32) -> String {
    format!("page{page}.html")
}

/* ---------- dataset ---------- */

/// Full overwrite of the dataset artifact. An empty row set is a no-op
/// and returns `Ok(None)`: a run that extracted nothing must not
/// clobber the previous good dataset.
pub fn save_dataset_in(root: &Path, ds: &DataSet) -> Result<Option<PathBuf>, Box<dyn Error>> {
    if ds.rows.is_empty() {
        return Ok(None);
    }
    ensure_directory(root)?;
    let path = root.join(DATASET_FILE);
    fs::write(&path, rows_to_string(&ds.rows, &ds.headers, STORE_SEP))?;
    Ok(Some(path))
}

pub fn save_dataset(ds: &DataSet) -> Result<Option<PathBuf>, Box<dyn Error>> {
    save_dataset_in(&store_dir(), ds)
}

/// `None` when the artifact does not exist yet — an expected state on
/// first run, not an error.
pub fn load_dataset_in(root: &Path) -> Option<DataSet> {
    let text = fs::read_to_string(root.join(DATASET_FILE)).ok()?;
    let (headers, rows) = detect_headers(parse_rows(&text, STORE_SEP));
    Some(DataSet { headers, rows })
}

pub fn load_dataset() -> Option<DataSet> {
    load_dataset_in(&store_dir())
}

/* ---------- page archive ---------- */

/// Write/overwrite the raw markup archived for one page number.
pub fn save_page_in(root: &Path, page: u32, markup: &str) -> Result<PathBuf, Box<dyn Error>> {
    let dir = root.join(PAGES_SUBDIR);
    ensure_directory(&dir)?;
    let path = dir.join(page_file(page));
    fs::write(&path, markup)?;
    Ok(path)
}

pub fn save_page(page: u32, markup: &str) -> Result<PathBuf, Box<dyn Error>> {
    save_page_in(&store_dir(), page, markup)
}

pub fn load_page_in(root: &Path, page: u32) -> Option<String> {
    fs::read_to_string(root.join(PAGES_SUBDIR).join(page_file(page))).ok()
}

pub fn load_page(page: u32) -> Option<String> {
    load_page_in(&store_dir(), page)
}
