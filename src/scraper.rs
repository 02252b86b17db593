use std::time::Duration;

use anyhow::Result;
use futures::{stream, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::warn;

use crate::error::ScrapeError;
use crate::parser;
use crate::record::CourseRecord;

const CONCURRENCY: usize = 8;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client shared by the sitemap fetch and every page fetch.
pub fn build_client() -> Result<Client, ScrapeError> {
    Ok(Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?)
}

/// Fetch one course page and return its body decoded as UTF-8, ignoring
/// whatever charset the response headers claim.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Scrape every sampled course with bounded concurrency. The stream is
/// buffered, not unordered, so output order always equals input order.
pub async fn scrape_courses(client: &Client, urls: Vec<String>) -> Result<Vec<CourseRecord>> {
    let pb = ProgressBar::new(urls.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let records: Vec<CourseRecord> = stream::iter(urls)
        .map(|url| {
            let client = client.clone();
            let pb = pb.clone();
            async move {
                let record = scrape_one(&client, &url).await;
                pb.inc(1);
                record
            }
        })
        .buffered(CONCURRENCY)
        .collect()
        .await;

    pb.finish_and_clear();
    Ok(records)
}

/// Fetch + extract one course. A page that cannot be fetched still yields a
/// record, with only the URL populated, so the run never loses a row.
async fn scrape_one(client: &Client, url: &str) -> CourseRecord {
    match fetch_page(client, url).await {
        Ok(html) => parser::process_page(url, &html),
        Err(e) => {
            warn!("Failed to fetch {}: {}", url, e);
            CourseRecord::from_url(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_pages_degrade_to_url_only_records_in_order() {
        let client = build_client().unwrap();
        let urls = vec![
            "http://127.0.0.1:9/course/a".to_string(),
            "http://127.0.0.1:9/course/b".to_string(),
            "http://127.0.0.1:9/course/c".to_string(),
        ];

        let records = scrape_courses(&client, urls.clone()).await.unwrap();

        assert_eq!(records.len(), urls.len());
        for (record, url) in records.iter().zip(&urls) {
            assert_eq!(&record.url, url);
            assert!(record.name.is_none());
            assert_eq!(record.week_count, 0);
        }
    }
}
