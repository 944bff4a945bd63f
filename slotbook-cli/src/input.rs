//! Stand-ins for date and time pickers: turn typed input into the stored
//! "D/M/YYYY" and "hh:mm AM/PM" forms.

use anyhow::{Result, anyhow};
use slotbook_core::when::{format_clock, format_day, parse_clock, parse_day};

/// Accepts "D/M/YYYY" or natural language ("tomorrow", "next friday").
pub fn day_from_input(input: &str) -> Result<String> {
    let input = input.trim();
    if let Some(day) = parse_day(input) {
        return Ok(format_day(day));
    }

    let dt = fuzzydate::parse(input)
        .map_err(|_| anyhow!("Could not parse date: \"{}\". Try D/M/YYYY", input))?;
    Ok(format_day(dt.date()))
}

/// Accepts "09:00 AM", "9am", "9:30 pm" or "21:15".
pub fn time_from_input(input: &str) -> Result<String> {
    parse_clock(input)
        .map(format_clock)
        .ok_or_else(|| anyhow!("Could not parse time: \"{}\". Try 9am or 21:15", input.trim()))
}

/// Split a "NAME=TIME" assignment.
pub fn assignment_from_input(input: &str) -> Result<(String, String)> {
    let (name, time) = input
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected NAME=TIME, got \"{}\"", input))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Missing name in \"{}\"", input));
    }
    Ok((name.to_string(), time_from_input(time)?))
}
