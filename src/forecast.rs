//! Forecast view-model derivations
//!
//! Pure functions that reshape the loaded forecast series for display: the
//! five-day window, day headings, the hourly subset for a selected day, and
//! the default day selection. Everything here is recomputed on demand from
//! the series; nothing is cached. Callers pass in "today" so the rules stay
//! deterministic under test.

use chrono::NaiveDate;

use crate::data::{DailyEntry, HourlyEntry};

/// Select the five-day window to display.
///
/// When today appears in the series with at least five entries remaining
/// from it, the window is the five entries starting there. Otherwise (today
/// absent, or too close to the end of the series) the window falls back to
/// the first five entries. Series shorter than five days are returned whole.
pub fn five_day_window(daily: &[DailyEntry], today: NaiveDate) -> &[DailyEntry] {
    let fallback = daily.len().min(5);
    match daily.iter().position(|entry| entry.date == today) {
        Some(start) if start + 5 <= daily.len() => &daily[start..start + 5],
        _ => &daily[..fallback],
    }
}

/// Format the heading for a window entry.
///
/// Index 0 is always rendered as `Today, <month> <day>`; later indices carry
/// the full weekday name instead.
pub fn day_label(date: NaiveDate, window_index: usize) -> String {
    if window_index == 0 {
        format!("Today, {}", date.format("%b %-d"))
    } else {
        date.format("%A, %b %-d").to_string()
    }
}

/// Hourly entries falling on the given day, in source order
pub fn hourly_for_day(hourly: &[HourlyEntry], day: NaiveDate) -> Vec<HourlyEntry> {
    hourly
        .iter()
        .filter(|entry| entry.time.date() == day)
        .copied()
        .collect()
}

/// The day to drill into right after a fetch: today when the series has it,
/// otherwise the first entry; none for an empty series
pub fn default_selected_day(daily: &[DailyEntry], today: NaiveDate) -> Option<NaiveDate> {
    if daily.iter().any(|entry| entry.date == today) {
        Some(today)
    } else {
        daily.first().map(|entry| entry.date)
    }
}
