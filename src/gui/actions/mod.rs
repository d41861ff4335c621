// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{scrape,open_store}.

mod open_store;
mod scrape;

pub use open_store::open_store;
pub use scrape::scrape;
