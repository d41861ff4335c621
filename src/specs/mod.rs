// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Hosts the **page-specific scraping specification** for the site.
//! A spec encodes *where the ground truth lives in the HTML* and *how to
//! extract it* — nothing else.
//!
//! ## What lives here
//! - **Pure HTML extraction** for the listing pages (`/page/{n}`):
//!   CSS-selector walks over the repeating card structure.
//! - **The column shape of the dataset** (`movies::headers`, column
//!   index constants) so the rest of the pipeline can rely on it.
//!
//! ## What does **not** live here
//! - **Fetching** — `core::fetch` owns sessions, retries and the TLS
//!   fallback.
//! - **Caching/persistence** — `store` reads and writes the artifacts.
//! - **GUI concerns and statistics** — the dashboard reads canonical
//!   rows and computes its views elsewhere (`stats`, `gui`).
//!
//! ## Conventions & invariants
//! - Extraction never fails: missing structure resolves to empty
//!   strings, not errors.
//! - Record order equals document order of the cards.
//! - Specs are testable **offline** against captured or synthetic
//!   markup; no network in tests.

pub mod movies;
