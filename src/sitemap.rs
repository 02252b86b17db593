use quick_xml::events::Event;
use rand::Rng;
use reqwest::Client;
use tracing::info;

use crate::error::ScrapeError;

const SITEMAP_URL: &str = "https://www.coursera.org/sitemap~www~courses.xml";

/// How many course pages one run analyzes.
pub const SAMPLE_SIZE: usize = 20;

/// Fetch the course sitemap and return every <loc> URL it lists.
pub async fn fetch_course_urls(client: &Client) -> Result<Vec<String>, ScrapeError> {
    info!("Fetching course sitemap: {}", SITEMAP_URL);
    let xml = client
        .get(SITEMAP_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let urls = parse_urlset(&xml)?;
    info!("Courses listed in sitemap: {}", urls.len());
    Ok(urls)
}

/// Pick `count` URLs uniformly at random, with replacement. The RNG is
/// injected; tests seed it, production passes `rand::rng()`.
pub fn sample_courses<R: Rng>(urls: &[String], count: usize, rng: &mut R) -> Vec<String> {
    if urls.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| urls[rng.random_range(0..urls.len())].clone())
        .collect()
}

/// Parse a urlset XML and return the text of each <url>'s <loc> child.
fn parse_urlset(xml: &str) -> Result<Vec<String>, ScrapeError> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut urls = Vec::new();
    let mut in_url = false;
    let mut in_loc = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"url" => in_url = true,
                b"loc" if in_url => in_loc = true,
                _ => {}
            },
            Ok(Event::Text(e)) if in_loc => {
                let text = e
                    .unescape()
                    .map_err(|err| ScrapeError::Parse(err.to_string()))?;
                urls.push(text.to_string());
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"loc" => in_loc = false,
                b"url" => in_url = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ScrapeError::Parse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const URLSET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
<url><loc>https://www.coursera.org/course/one</loc><changefreq>weekly</changefreq></url>
<url><loc>https://www.coursera.org/course/two?a=1&amp;b=2</loc></url>
<url><loc>https://www.coursera.org/course/three</loc></url>
</urlset>"#;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn urlset_locs_in_document_order() {
        let parsed = parse_urlset(URLSET).unwrap();
        assert_eq!(
            parsed,
            [
                "https://www.coursera.org/course/one",
                "https://www.coursera.org/course/two?a=1&b=2",
                "https://www.coursera.org/course/three",
            ]
        );
    }

    #[test]
    fn malformed_sitemap_is_a_parse_error() {
        // bare ampersand: not a valid XML entity
        let err =
            parse_urlset("<urlset><url><loc>https://x?a=1&b=2</loc></url></urlset>").unwrap_err();
        assert!(matches!(err, ScrapeError::Parse(_)));
    }

    #[test]
    fn sample_honors_count_and_source() {
        let pool = urls(&["https://a", "https://b", "https://c"]);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample_courses(&pool, 20, &mut rng);
        assert_eq!(picked.len(), 20);
        assert!(picked.iter().all(|u| pool.contains(u)));
    }

    #[test]
    fn sample_is_deterministic_under_a_seed() {
        let pool = urls(&["https://a", "https://b", "https://c"]);
        let first = sample_courses(&pool, 10, &mut StdRng::seed_from_u64(42));
        let second = sample_courses(&pool, 10, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn sample_of_empty_list_is_empty() {
        let picked = sample_courses(&[], 20, &mut StdRng::seed_from_u64(0));
        assert!(picked.is_empty());
    }
}
