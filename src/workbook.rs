use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Color, Format, FormatBorder, Url, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::error::ScrapeError;
use crate::record::{CourseRecord, Field, COLUMNS, LINK_LABEL};

const HEADER_FILL: Color = Color::RGB(0xA9A9A9);
const BAND_FILL: Color = Color::RGB(0xD3D3D3);
const TITLE_COLUMN_WIDTH: f64 = 50.0;

pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["xls", "xlsx"];

/// Check the destination before any network work happens: the directory must
/// already exist and the extension must be a spreadsheet one. Returns the
/// absolute path.
pub fn validate_path(raw: &str) -> Result<PathBuf, ScrapeError> {
    let path = std::path::absolute(Path::new(raw))
        .map_err(|_| ScrapeError::MissingDirectory(PathBuf::from(raw)))?;

    let dir = path
        .parent()
        .ok_or_else(|| ScrapeError::MissingDirectory(path.clone()))?;
    if !dir.is_dir() {
        return Err(ScrapeError::MissingDirectory(dir.to_path_buf()));
    }

    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    if !ACCEPTED_EXTENSIONS.contains(&extension) {
        return Err(ScrapeError::BadExtension(path));
    }

    Ok(path)
}

/// Render all records into one styled sheet and save it. Either the whole
/// file lands on disk or the operation fails.
pub fn write_workbook(records: &[CourseRecord], path: &Path) -> Result<(), ScrapeError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_background_color(HEADER_FILL);
    let body_format = Format::new().set_border(FormatBorder::Thin);
    let band_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_background_color(BAND_FILL);

    for column in &COLUMNS {
        sheet.write_string_with_format(0, column.index, column.label, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32; // sheet row 0 is the header
        let format = if banded(row) { &band_format } else { &body_format };
        for column in &COLUMNS {
            match column.field {
                Field::Name => write_opt(sheet, row, column.index, &record.name, format)?,
                Field::Language => write_opt(sheet, row, column.index, &record.language, format)?,
                Field::StartDate => {
                    write_opt(sheet, row, column.index, &record.start_date, format)?
                }
                Field::Weeks => {
                    sheet.write_number_with_format(
                        row,
                        column.index,
                        record.week_count as f64,
                        format,
                    )?;
                }
                Field::Rating => write_opt(sheet, row, column.index, &record.rating, format)?,
                Field::Url => {
                    let link = Url::new(&record.url).set_text(LINK_LABEL);
                    sheet.write_url_with_format(row, column.index, link, format)?;
                }
            }
        }
    }

    sheet.set_column_width(0, TITLE_COLUMN_WIDTH)?;
    workbook.save(path)?;
    info!("Workbook saved: {}", path.display());
    Ok(())
}

/// Banding rule: counting 1-based spreadsheet rows, data starts at row 2 and
/// even-numbered rows (2, 4, ...) get the light fill. `row` is 0-based here.
fn banded(row: u32) -> bool {
    (row + 1) % 2 == 0
}

/// Missing fields still get a bordered (and possibly banded) blank cell.
fn write_opt(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Option<String>,
    format: &Format,
) -> Result<(), XlsxError> {
    match value {
        Some(text) => sheet.write_string_with_format(row, col, text, format)?,
        None => sheet.write_blank(row, col, format)?,
    };
    Ok(())
}
