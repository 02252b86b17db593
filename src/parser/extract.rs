//! Per-field extractors over a parsed course page.
//!
//! Each one is a stateless function that tolerates absent markup by
//! returning an empty value. They are where the site's current HTML
//! structure is encoded, so they are the part most likely to rot.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.title.display-3-text").unwrap());
static RATING_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.ratings-text.bt3-visible-xs").unwrap());
static WEEK_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.week").unwrap());
static JSON_LD_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"script[type="application/ld+json"]"#).unwrap());
static INFO_TABLE_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "table.basic-info-table.bt3-table.bt3-table-striped.bt3-table-bordered.bt3-table-responsive",
    )
    .unwrap()
});
static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Course title.
pub fn name(document: &Html) -> Option<String> {
    element_text(document, &NAME_SEL)
}

/// Rating line as the page displays it, e.g. "4.8 stars".
pub fn rating(document: &Html) -> Option<String> {
    element_text(document, &RATING_SEL)
}

/// Number of week blocks in the syllabus, a structural proxy for duration.
/// A page without a syllabus counts as 0 weeks, not as missing.
pub fn week_count(document: &Html) -> u32 {
    document.select(&WEEK_SEL).count() as u32
}

/// Start date from the embedded JSON-LD block: `hasCourseInstance[0].startDate`.
/// None when the block is absent, unparseable, or shaped differently.
pub fn start_date(document: &Html) -> Option<String> {
    let raw: String = document.select(&JSON_LD_SEL).next()?.text().collect();
    let data: serde_json::Value = serde_json::from_str(&raw).ok()?;
    let date = data
        .get("hasCourseInstance")?
        .get(0)?
        .get("startDate")?
        .as_str()?;
    Some(date.to_string())
}

/// Course language: the cell right after the literal "Language" cell in the
/// info table. The site never puts the label last, but a page that does gets
/// None back instead of an out-of-range panic.
pub fn language(document: &Html) -> Option<String> {
    let table = document.select(&INFO_TABLE_SEL).next()?;
    let cells: Vec<String> = table
        .select(&CELL_SEL)
        .map(|cell| normalize(&cell.text().collect::<String>()))
        .collect();
    let label_at = cells.iter().position(|text| text == "Language")?;
    cells.get(label_at + 1).cloned()
}

fn element_text(document: &Html, selector: &Selector) -> Option<String> {
    let text = normalize(&document.select(selector).next()?.text().collect::<String>());
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn normalize(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").to_string()
}

// ── Tests ──
