//! Day and clock values as they are stored on events.
//!
//! Days are stored as "D/M/YYYY" without zero padding ("3/1/2026") and clock
//! values as "hh:mm AM/PM" ("09:05 PM"). Neither string sorts correctly as
//! text, so every comparison goes through the parsed `NaiveDate` / `NaiveTime`.

use std::cmp::Ordering;

use chrono::{Datelike, Local, NaiveDate, NaiveTime};

/// Today's calendar day in the local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render a day the way events store it ("D/M/YYYY").
pub fn format_day(day: NaiveDate) -> String {
    format!("{}/{}/{}", day.day(), day.month(), day.year())
}

/// Parse a stored "D/M/YYYY" day. Zero padding is optional.
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    let mut parts = input.trim().split('/');
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Render a clock value the way events store it ("hh:mm AM/PM").
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Parse a clock value.
///
/// Accepts the stored form ("09:00 AM") as well as looser input such as
/// "9am", "9:30 pm" and 24-hour "21:15".
pub fn parse_clock(input: &str) -> Option<NaiveTime> {
    let upper = input.trim().to_uppercase();

    let (body, meridiem) = if let Some(body) = upper.strip_suffix("AM") {
        (body.trim(), Some(false))
    } else if let Some(body) = upper.strip_suffix("PM") {
        (body.trim(), Some(true))
    } else {
        (upper.as_str(), None)
    };

    let (hour, minute) = match body.split_once(':') {
        Some((h, m)) => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?),
        None => (body.parse::<u32>().ok()?, 0),
    };

    let hour = match meridiem {
        Some(pm) => {
            if hour == 0 || hour > 12 {
                return None;
            }
            hour % 12 + if pm { 12 } else { 0 }
        }
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Whether a stored day lies strictly before `today`.
///
/// A day that does not parse is never expired, so malformed records survive
/// the purge.
pub fn is_expired(day: &str, today: NaiveDate) -> bool {
    match parse_day(day) {
        Some(date) => date < today,
        None => false,
    }
}

/// Order two stored days chronologically.
///
/// Parseable days come first in calendar order; unparseable ones follow in
/// text order.
pub fn compare_days(a: &str, b: &str) -> Ordering {
    compare_parsed(parse_day(a), parse_day(b)).then_with(|| a.cmp(b))
}

/// Order two stored clock values chronologically, unparseable ones last.
pub fn compare_clocks(a: &str, b: &str) -> Ordering {
    compare_parsed(parse_clock(a), parse_clock(b)).then_with(|| a.cmp(b))
}

fn compare_parsed<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
