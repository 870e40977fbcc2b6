//! Date helpers for form input
//!
//! Hosts collect dates as `dd/mm/yyyy` text. Parsing happens once at the
//! form boundary; everything past it works with [`chrono::NaiveDate`].

use crate::error::{AppError, AppResult};
use chrono::{NaiveDate, Utc};

const BR_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `dd/mm/yyyy` date string
pub fn parse_br_date(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), BR_DATE_FORMAT).map_err(|_| {
        AppError::invalid_format(format!("invalid date '{}', expected dd/mm/yyyy", input))
    })
}

/// Format a date as `dd/mm/yyyy`
pub fn format_br_date(date: NaiveDate) -> String {
    date.format(BR_DATE_FORMAT).to_string()
}

/// Check whether a date is strictly after today
pub fn is_future(date: NaiveDate) -> bool {
    date > Utc::now().date_naive()
}
