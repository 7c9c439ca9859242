//! Calendar-month helpers shared by interpolation, forecasting and events

use crate::error::Result;
use chrono::{Datelike, Days, Months, NaiveDate};

/// Parse a `YYYY-MM-DD` date, or a `YYYY-MM` month (taken as its 1st day)
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(full_err) => NaiveDate::parse_from_str(&format!("{}-01", input), "%Y-%m-%d")
            .map_err(|_| full_err.into()),
    }
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Whether `date` falls on the 1st of its month
pub fn is_month_start(date: NaiveDate) -> bool {
    date.day() == 1
}

/// Whole calendar months from `from` to `to`, ignoring the day of month
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}

/// Shift `date` by a signed number of calendar months.
///
/// The day is clamped to the end of shorter months (Jan 31 + 1 month is
/// Feb 28/29). `None` only when the result is out of chrono's range.
pub fn shift_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let delta = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    }
}

/// Month starts after `last_historical`, up to and including `end`.
///
/// The first date is the 1st of the month following `last_historical`,
/// whatever its day; stepping stops once a date passes `end`.
pub fn forecast_dates(last_historical: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = month_start(last_historical).checked_add_months(Months::new(1));

    while let Some(date) = current {
        if date > end {
            break;
        }
        dates.push(date);
        current = date.checked_add_months(Months::new(1));
    }

    dates
}
