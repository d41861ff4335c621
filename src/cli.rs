// src/cli.rs
use std::{env, error::Error};

use crate::config::consts::BASE_URL;
use crate::progress::Progress;
use crate::{scrape, stats, store};

/// Progress sink printing status lines to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Scraping {total} page(s) from {BASE_URL}…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, page: u32) {
        eprintln!("Page {page} done");
    }
    fn finish(&mut self) {
        eprintln!("Fetch complete");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    parse_args()?;

    let mut prog = CliProgress;
    let report = scrape::run(Some(&mut prog))?;
    match &report.dataset {
        Some(path) => println!("Saved {} record(s) → {}", report.records, path.display()),
        None => println!("No records extracted; previous dataset kept."),
    }

    if let Some(ds) = store::load_dataset() {
        print_summary(&ds);
    }
    Ok(())
}

fn parse_args() -> Result<(), Box<dyn Error>> {
    for a in env::args().skip(1) {
        match a.as_str() {
            "-h" | "--help" => {
                eprintln!("{}", usage());
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

fn usage() -> String {
    join!(
        "movie_scrape — fetch the ", BASE_URL, " listings and rebuild .store/movies.csv\n",
        "\n",
        "Usage: cli [-h|--help]\n",
        "\n",
        "Every run fetches all pages; there is nothing else to configure."
    )
}

fn print_summary(ds: &store::DataSet) {
    match stats::summarize(ds) {
        Ok(sum) => {
            println!("Movies: {}", sum.count);
            match sum.avg_score {
                Some(avg) => println!("Average score: {avg:.2}"),
                None => println!("Average score: n/a"),
            }
            println!("Distinct categories: {}", sum.distinct_categories);
        }
        Err(e) => eprintln!("Summary unavailable: {e}"),
    }

    let counts = stats::category_counts(ds);
    if !counts.is_empty() {
        println!("\nCategory breakdown:");
        for (name, n) in counts {
            println!("  {name}: {n}");
        }
    }
}
