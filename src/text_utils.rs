use chrono::{Datelike, Months, NaiveDate};

use crate::error::{Error, Result};

/// Parses a `YYYY-MM` month into the first day of that month.
pub fn parse_month(month: &str) -> Result<NaiveDate> {
    let first_day = format!("{}-01", month);
    match NaiveDate::parse_from_str(&first_day, "%Y-%m-%d") {
        Ok(date) if month.len() == 7 => Ok(date),
        _ => Err(Error::InvalidMonth(month.to_string())),
    }
}

/// Human-readable label, e.g. `January 2024`.
pub fn format_month_label(first_day: &NaiveDate) -> String {
    first_day.format("%B %Y").to_string()
}

pub fn format_month(date: &NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// `YYYY-MM` of the calendar month before the one `first_day` belongs to.
pub fn previous_month(first_day: &NaiveDate) -> String {
    let first_day = first_day.with_day(1).unwrap_or(*first_day);
    match first_day.checked_sub_months(Months::new(1)) {
        Some(previous) => format_month(&previous),
        None => format_month(&first_day),
    }
}
