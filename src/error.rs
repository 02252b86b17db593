use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run. Per-page extraction problems are not
/// errors at all: missing markup degrades to an empty field.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed sitemap XML: {0}")]
    Parse(String),
    #[error("output directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("output file must end in .xls or .xlsx, got {}", .0.display())]
    BadExtension(PathBuf),
    #[error("failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}
