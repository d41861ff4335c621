// src/core/html.rs

use scraper::{ElementRef, Selector};

/// Text of an element: every nested text node trimmed, empties skipped,
/// fragments concatenated. Keeps card text free of markup indentation
/// without touching whitespace inside a single text node.
pub fn text_of(el: ElementRef) -> String {
    let mut out = s!();
    for piece in el.text() {
        out.push_str(piece.trim());
    }
    out
}

/// Text of the first descendant matching `sel`, empty string when absent.
pub fn first_text(el: ElementRef, sel: &Selector) -> String {
    el.select(sel).next().map(text_of).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn text_of_strips_per_node_and_concatenates() {
        let doc = Html::parse_fragment("<div>\n  2020-07-03 上映\n</div>");
        let sel = Selector::parse("div").unwrap();
        let div = doc.select(&sel).next().unwrap();
        assert_eq!(text_of(div), "2020-07-03 上映");
    }

    #[test]
    fn first_text_is_empty_when_nothing_matches() {
        let doc = Html::parse_fragment("<div><p>hi</p></div>");
        let div_sel = Selector::parse("div").unwrap();
        let h2_sel = Selector::parse("h2").unwrap();
        let div = doc.select(&div_sel).next().unwrap();
        assert_eq!(first_text(div, &h2_sel), "");
    }
}
