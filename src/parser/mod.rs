pub mod extract;

use scraper::Html;

use crate::record::CourseRecord;

/// Parse one course page and assemble its record: five extracted fields plus
/// the URL the page was fetched from.
pub fn process_page(url: &str, html: &str) -> CourseRecord {
    let document = Html::parse_document(html);
    CourseRecord {
        name: extract::name(&document),
        language: extract::language(&document),
        start_date: extract::start_date(&document),
        week_count: extract::week_count(&document),
        rating: extract::rating(&document),
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_carries_the_input_url() {
        let record = process_page("https://x/course/abc", "<html><body></body></html>");
        assert_eq!(record.url, "https://x/course/abc");
    }
}
