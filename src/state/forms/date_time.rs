//! Fixed textual date-time format used by form inputs

use chrono::{DateTime, NaiveDateTime, Utc};

/// `YYYY-MM-DDTHH:mm`, interpreted in UTC
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Outcome of reading a date-time text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDateTime {
    /// No text, or only whitespace
    Absent,
    /// Text present but not in [`DATE_TIME_FORMAT`]
    Invalid(String),
    Value(DateTime<Utc>),
}

impl ParsedDateTime {
    /// Collapse to a timestamp; invalid text is treated as absent
    pub fn into_option(self) -> Option<DateTime<Utc>> {
        match self {
            ParsedDateTime::Value(value) => Some(value),
            ParsedDateTime::Absent | ParsedDateTime::Invalid(_) => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ParsedDateTime::Invalid(_))
    }
}

pub fn format_date_time(value: &DateTime<Utc>) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

pub fn parse_date_time(text: Option<&str>) -> ParsedDateTime {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return ParsedDateTime::Absent;
    };
    match NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT) {
        Ok(naive) => ParsedDateTime::Value(naive.and_utc()),
        Err(_) => ParsedDateTime::Invalid(text.to_string()),
    }
}
