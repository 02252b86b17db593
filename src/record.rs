use serde::Serialize;

/// Visible label of the URL hyperlink cell.
pub const LINK_LABEL: &str = "подробнее";

/// One scraped course page. Only `url` is guaranteed to be populated; every
/// other field is whatever the page happened to carry.
#[derive(Debug, Clone, Serialize)]
pub struct CourseRecord {
    pub name: Option<String>,
    pub language: Option<String>,
    pub start_date: Option<String>,
    pub week_count: u32,
    pub rating: Option<String>,
    pub url: String,
}

impl CourseRecord {
    /// Record for a page that could not be fetched at all.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            name: None,
            language: None,
            start_date: None,
            week_count: 0,
            rating: None,
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Language,
    StartDate,
    Weeks,
    Rating,
    Url,
}

pub struct Column {
    pub field: Field,
    pub index: u16,
    pub label: &'static str,
}

/// Field -> column index -> display label. Read-only after startup; the
/// writer iterates this table so header and body always agree on layout.
pub const COLUMNS: [Column; 6] = [
    Column { field: Field::Name, index: 0, label: "Имя" },
    Column { field: Field::Language, index: 1, label: "Язык" },
    Column { field: Field::StartDate, index: 2, label: "Дата начала" },
    Column { field: Field::Weeks, index: 3, label: "Продолжительность (недель)" },
    Column { field: Field::Rating, index: 4, label: "Рейтинг" },
    Column { field: Field::Url, index: 5, label: "URL" },
];
