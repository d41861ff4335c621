// src/specs/movies.rs

// Extraction spec for the movie listing cards. One card ("div.el-card")
// yields one record; every field degrades to an empty string when the
// markup underneath it is missing.

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{CATEGORY_SEP, DATASET_HEADERS};
use crate::core::html::{first_text, text_of};

// Column indices in the dataset rows, matching DATASET_HEADERS.
pub const COL_SCORE: usize = 1;
pub const COL_CATEGORIES: usize = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub score: String,
    pub categories: Vec<String>,
    pub region: String,
    pub runtime: String,
    pub release_date: String,
}

impl MovieRecord {
    /// Dataset row in the fixed column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.score.clone(),
            self.categories_cell(),
            self.region.clone(),
            self.runtime.clone(),
            self.release_date.clone(),
        ]
    }

    /// Categories joined for the CSV cell. The separator is not escaped;
    /// category names on this site never contain '|'.
    pub fn categories_cell(&self) -> String {
        let sep = s!(CATEGORY_SEP);
        self.categories.join(&sep)
    }
}

pub fn headers() -> Vec<String> {
    DATASET_HEADERS.iter().map(|h| s!(*h)).collect()
}

/// Split a Categories cell back into tokens, discarding empties.
pub fn split_categories(cell: &str) -> Vec<String> {
    cell.split(CATEGORY_SEP)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| s!(t))
        .collect()
}

struct Selectors {
    card: Selector,
    title: Selector,
    score: Selector,
    category: Selector,
    info: Selector,
    span: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            card: Selector::parse("div.el-card").unwrap(),
            title: Selector::parse("a.name h2").unwrap(),
            score: Selector::parse("p.score").unwrap(),
            category: Selector::parse(".categories span").unwrap(),
            info: Selector::parse("div.m-v-sm.info").unwrap(),
            span: Selector::parse("span").unwrap(),
        }
    }
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(Selectors::new)
}

/// Extract every movie card from one listing page, in document order.
pub fn extract(markup: &str) -> Vec<MovieRecord> {
    let doc = Html::parse_document(markup);
    let sels = selectors();
    doc.select(&sels.card)
        .map(|card| extract_card(card, sels))
        .collect()
}

fn extract_card(card: ElementRef, sels: &Selectors) -> MovieRecord {
    let title = first_text(card, &sels.title);
    let score = first_text(card, &sels.score);

    let categories: Vec<String> = card
        .select(&sels.category)
        .map(text_of)
        .filter(|c| !c.is_empty())
        .collect();

    let mut region = s!();
    let mut runtime = s!();
    let mut release_date = s!();

    let info_blocks: Vec<ElementRef> = card.select(&sels.info).collect();
    if let Some(facts) = info_blocks.first() {
        // Span 1 is the bullet between region and runtime; keep the raw
        // sequence so the indices line up.
        let spans: Vec<String> = facts.select(&sels.span).map(text_of).collect();
        if let Some(first) = spans.first() {
            region = first.clone();
        }
        if let Some(third) = spans.get(2) {
            runtime = third.clone();
        }
    }
    if let Some(dates) = info_blocks.get(1) {
        release_date = text_of(*dates);
    }

    MovieRecord { title, score, categories, region, runtime, release_date }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(inner: &str) -> String {
        format!("<html><body><div class=\"el-card\">{inner}</div></body></html>")
    }

    #[test]
    fn full_card_extracts_all_fields() {
        let doc = card(
            r#"
            <a href="/detail/1" class="name"><h2 class="m-b-sm">霸王别姬</h2></a>
            <div class="categories">
              <button><span>剧情</span></button>
              <button><span>爱情</span></button>
            </div>
            <div class="m-v-sm info">
              <span>中国内地、中国香港</span>
              <span class="m-v-sm">/</span>
              <span class="m-v-sm">171 分钟</span>
            </div>
            <div class="m-v-sm info"><span>1993-07-26 上映</span></div>
            <p class="score m-t-md">9.5</p>
            "#,
        );
        let records = extract(&doc);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.title, "霸王别姬");
        assert_eq!(r.score, "9.5");
        assert_eq!(r.categories, vec![s!("剧情"), s!("爱情")]);
        assert_eq!(r.region, "中国内地、中国香港");
        assert_eq!(r.runtime, "171 分钟");
        assert_eq!(r.release_date, "1993-07-26 上映");
    }

    #[test]
    fn missing_elements_become_empty_fields() {
        let doc = card("<a class=\"name\"><h2>孤片</h2></a>");
        let records = extract(&doc);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.title, "孤片");
        assert_eq!(r.score, "");
        assert!(r.categories.is_empty());
        assert_eq!(r.region, "");
        assert_eq!(r.runtime, "");
        assert_eq!(r.release_date, "");
    }

    #[test]
    fn runtime_needs_three_spans() {
        let doc = card(
            r#"
            <a class="name"><h2>短片</h2></a>
            <div class="m-v-sm info"><span>美国</span></div>
            "#,
        );
        let r = &extract(&doc)[0];
        assert_eq!(r.region, "美国");
        assert_eq!(r.runtime, "");
        assert_eq!(r.release_date, "");
    }

    #[test]
    fn empty_category_spans_are_dropped() {
        let doc = card(
            r#"
            <div class="categories">
              <button><span>动作</span></button>
              <button><span>  </span></button>
            </div>
            "#,
        );
        let r = &extract(&doc)[0];
        assert_eq!(r.categories, vec![s!("动作")]);
    }

    #[test]
    fn categories_cell_round_trips() {
        let rec = MovieRecord {
            categories: vec![s!("剧情"), s!("犯罪")],
            ..MovieRecord::default()
        };
        let cell = rec.categories_cell();
        assert_eq!(cell, "剧情|犯罪");
        assert_eq!(split_categories(&cell), rec.categories);
    }

    #[test]
    fn no_cards_means_no_records() {
        assert!(extract("<html><body><p>maintenance</p></body></html>").is_empty());
    }
}
