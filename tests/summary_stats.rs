// tests/summary_stats.rs
//
// Summary math over the canonical dataset shape: average rounding,
// fail-hard on non-numeric scores, and the first-seen tie-break in the
// category frequency table.

use movie_scrape::specs::movies::{MovieRecord, split_categories};
use movie_scrape::scrape::to_dataset;
use movie_scrape::stats::{category_counts, summarize};

fn record(score: &str, categories: &[&str]) -> MovieRecord {
    MovieRecord {
        title: "电影".into(),
        score: score.into(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        ..MovieRecord::default()
    }
}

#[test]
fn average_score_rounds_to_8_33() {
    let ds = to_dataset(&[
        record("9.5", &["剧情"]),
        record("8.0", &["剧情"]),
        record("7.5", &["犯罪"]),
    ]);
    let sum = summarize(&ds).unwrap();
    assert_eq!(sum.count, 3);
    let avg = sum.avg_score.unwrap();
    assert_eq!((avg * 100.0).round() / 100.0, 8.33);
    assert_eq!(sum.distinct_categories, 2);
}

#[test]
fn whitespace_around_scores_is_tolerated() {
    let ds = to_dataset(&[record(" 9.0 ", &[])]);
    let sum = summarize(&ds).unwrap();
    assert_eq!(sum.avg_score, Some(9.0));
}

#[test]
fn non_numeric_score_fails_the_whole_summary() {
    let ds = to_dataset(&[
        record("9.5", &["剧情"]),
        record("N/A", &["犯罪"]),
    ]);
    let err = summarize(&ds).unwrap_err().to_string();
    assert!(err.contains("N/A"), "error should name the offending cell: {err}");
}

#[test]
fn empty_dataset_has_no_average() {
    let ds = to_dataset(&[]);
    let sum = summarize(&ds).unwrap();
    assert_eq!(sum.count, 0);
    assert_eq!(sum.avg_score, None);
    assert_eq!(sum.distinct_categories, 0);
}

#[test]
fn category_ties_keep_first_seen_order() {
    let ds = to_dataset(&[
        record("9.0", &["剧情", "犯罪"]),
        record("8.0", &["剧情"]),
        record("7.0", &["喜剧"]),
    ]);
    let counts = category_counts(&ds);
    assert_eq!(
        counts,
        vec![
            ("剧情".to_string(), 2),
            ("犯罪".to_string(), 1), // seen before 喜剧, same count
            ("喜剧".to_string(), 1),
        ]
    );
}

#[test]
fn counts_come_from_the_packed_cell_not_the_struct() {
    // The dataset cell is the source of truth; splitting it must undo
    // the join exactly.
    let ds = to_dataset(&[record("9.0", &["剧情", "犯罪"])]);
    let cell = &ds.rows[0][2];
    assert_eq!(cell, "剧情|犯罪");
    assert_eq!(split_categories(cell), vec!["剧情".to_string(), "犯罪".to_string()]);
}
