// tests/store_roundtrip.rs
//
// Artifact layer: dataset round-trip, the empty-run no-clobber policy,
// and per-page archive overwrite semantics. Everything runs against a
// temp directory via the `_in` seams.

use std::fs;
use std::path::PathBuf;

use movie_scrape::scrape::to_dataset;
use movie_scrape::specs::movies::MovieRecord;
use movie_scrape::store::{load_dataset_in, load_page_in, save_dataset_in, save_page_in};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("movie_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn sample_records() -> Vec<MovieRecord> {
    vec![
        MovieRecord {
            title: "霸王别姬".into(),
            score: "9.5".into(),
            categories: vec!["剧情".into(), "爱情".into()],
            region: "中国内地、中国香港".into(),
            runtime: "171 分钟".into(),
            release_date: "1993-07-26 上映".into(),
        },
        MovieRecord {
            title: "Once, Twice".into(),
            score: "8.0".into(),
            categories: vec!["喜剧".into()],
            region: "美国".into(),
            runtime: "90 分钟".into(),
            release_date: String::new(),
        },
    ]
}

#[test]
fn dataset_round_trips_through_csv() {
    let root = tmp_dir("roundtrip");
    let ds = to_dataset(&sample_records());

    let path = save_dataset_in(&root, &ds).unwrap().expect("rows present, must write");
    assert!(path.exists());

    let loaded = load_dataset_in(&root).expect("artifact just written");
    assert_eq!(loaded.headers, ds.headers);
    assert_eq!(loaded.rows, ds.rows);
    // the comma inside "Once, Twice" must survive quoting
    assert_eq!(loaded.rows[1][0], "Once, Twice");
}

#[test]
fn empty_run_leaves_previous_dataset_untouched() {
    let root = tmp_dir("noclobber");
    let good = to_dataset(&sample_records());
    save_dataset_in(&root, &good).unwrap();

    let empty = to_dataset(&[]);
    let out = save_dataset_in(&root, &empty).unwrap();
    assert!(out.is_none(), "empty row set must be a no-op");

    let loaded = load_dataset_in(&root).expect("prior artifact preserved");
    assert_eq!(loaded.rows, good.rows);
}

#[test]
fn missing_dataset_is_none_not_an_error() {
    let root = tmp_dir("missing");
    assert!(load_dataset_in(&root).is_none());
}

#[test]
fn page_archive_overwrites_per_page() {
    let root = tmp_dir("pages");

    save_page_in(&root, 3, "<html>first run</html>").unwrap();
    save_page_in(&root, 3, "<html>second run</html>").unwrap();
    save_page_in(&root, 7, "<html>page seven</html>").unwrap();

    assert_eq!(load_page_in(&root, 3).as_deref(), Some("<html>second run</html>"));
    assert_eq!(load_page_in(&root, 7).as_deref(), Some("<html>page seven</html>"));
    assert!(load_page_in(&root, 4).is_none());
}
