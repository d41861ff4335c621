// src/stats.rs

// Summary metrics over the loaded dataset. The average fails on the
// first non-numeric score; rows are never silently skipped.

use std::collections::HashMap;
use std::error::Error;

use crate::specs::movies;
use crate::store::DataSet;

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// `None` only when the dataset has no rows.
    pub avg_score: Option<f64>,
    pub distinct_categories: usize,
}

pub fn summarize(ds: &DataSet) -> Result<Summary, Box<dyn Error>> {
    let count = ds.row_count();
    let avg_score = if count == 0 {
        None
    } else {
        let mut total = 0.0f64;
        for row in &ds.rows {
            let cell = row.get(movies::COL_SCORE).map(String::as_str).unwrap_or("");
            let score: f64 = cell
                .trim()
                .parse()
                .map_err(|_| format!("Non-numeric score: {cell:?}"))?;
            total += score;
        }
        Some(total / count as f64)
    };

    Ok(Summary {
        count,
        avg_score,
        distinct_categories: category_counts(ds).len(),
    })
}

/// Per-category frequencies, sorted by descending count. Ties keep the
/// order in which a category was first seen (stable sort).
pub fn category_counts(ds: &DataSet) -> Vec<(String, usize)> {
    let mut first_seen: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for row in &ds.rows {
        let cell = row.get(movies::COL_CATEGORIES).map(String::as_str).unwrap_or("");
        for cat in movies::split_categories(cell) {
            match counts.get_mut(&cat) {
                Some(n) => *n += 1,
                None => {
                    counts.insert(cat.clone(), 1);
                    first_seen.push(cat);
                }
            }
        }
    }

    let mut out: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|name| {
            let n = counts.get(&name).copied().unwrap_or(0);
            (name, n)
        })
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}
