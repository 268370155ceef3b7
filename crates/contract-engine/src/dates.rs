//! pt-PT date rendering for contract fields

use chrono::{DateTime, Datelike, NaiveDate};

/// Shown in place of a date the form left empty
pub const DATE_PLACEHOLDER: &str = "___/__/____";

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Parse a form date value
///
/// Date inputs submit `YYYY-MM-DD`; an RFC 3339 timestamp is also accepted
/// and its calendar date (in its own offset) is used.
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Short numeric form, `DD/MM/YYYY`
pub fn format_short_date(value: &str) -> Option<String> {
    parse_form_date(value).map(|date| date.format("%d/%m/%Y").to_string())
}

/// Long form, e.g. `15 de janeiro de 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}
