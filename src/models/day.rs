//! Day-bucket helpers
//!
//! A day bucket is the calendar date a timestamp belongs to. Timestamps are
//! truncated once, when a record is built, and the truncated date is what
//! every later comparison uses.

use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, TimeZone};

/// Calendar date of a timestamp, in the timestamp's own offset
pub fn day_of<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> NaiveDate {
    timestamp.date_naive()
}

/// Today's date in the local calendar
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local time with the offset pinned
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// The day before `date`
pub fn previous_day(date: NaiveDate) -> Option<NaiveDate> {
    date.pred_opt()
}

/// The day after `date`
pub fn next_day(date: NaiveDate) -> Option<NaiveDate> {
    date.succ_opt()
}

/// First and last day of a month, or `None` for an invalid month
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first - Duration::days(1)))
}

/// Number of days in a month, or `None` for an invalid month
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    month_bounds(year, month).map(|(_, last)| last.day())
}

/// Every day from `start` to `end` inclusive
pub fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Parse a `YYYY-MM` month reference
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let (year, month) = s.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    month_bounds(year, month).map(|_| (year, month))
}
