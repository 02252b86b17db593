mod error;
mod parser;
mod record;
mod scraper;
mod sitemap;
mod workbook;

use std::io::{self, Write};
use std::time::Instant;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "coursera_scraper",
    about = "Collects course metadata from Coursera into a styled spreadsheet"
)]
struct Cli {
    /// Output spreadsheet path (.xls or .xlsx); prompts if omitted
    #[arg(short, long)]
    file: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let raw = match cli.file {
        Some(file) => file,
        None => prompt("Enter the output file path (.xls or .xlsx):")?,
    };
    // Fatal before any network work.
    let out_path = workbook::validate_path(&raw)?;

    let client = scraper::build_client()?;
    let urls = sitemap::fetch_course_urls(&client).await?;
    let sample = sitemap::sample_courses(&urls, sitemap::SAMPLE_SIZE, &mut rand::rng());
    println!("Scraping {} course pages...", sample.len());

    let records = scraper::scrape_courses(&client, sample).await?;
    workbook::write_workbook(&records, &out_path)?;
    println!("Course data written to {}", out_path.display());

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    println!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
