//! Date extraction.
//!
//! Three patterns tried in fixed priority order:
//! 1. `[Date:] D MonthName YYYY` (month names are three-letter English
//!    abbreviations, case-insensitive)
//! 2. `D/M/YYYY` — day-first, Indian convention, NOT month-first
//! 3. `YYYY-M-D` ISO-like
//!
//! The first pattern to match wins; later patterns are not attempted. The
//! numeric patterns do not range-check day or month, so "31/13/2025"
//! matches and then fails calendar construction — that capture is treated
//! as no extracted date rather than falling through to a later pattern.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Lower-cased month abbreviations; position is the 0-based month index.
const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

fn month_index(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTHS.iter().position(|m| *m == lower).map(|i| i as u32)
}

fn month_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?:Date:\s*)?(\d{1,2})\s+(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+(\d{4})",
        )
        .expect("invalid month-name date regex")
    })
}

fn day_first_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").expect("invalid day-first regex"))
}

fn iso_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{4})-(\d{1,2})-(\d{1,2})").expect("invalid iso date regex"))
}

fn match_month_name(text: &str) -> Option<(i32, u32, u32)> {
    let caps = month_name_re().captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_index(&caps[2])? + 1;
    let year: i32 = caps[3].parse().ok()?;
    Some((year, month, day))
}

fn match_day_first(text: &str) -> Option<(i32, u32, u32)> {
    let caps = day_first_re().captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    Some((year, month, day))
}

fn match_iso(text: &str) -> Option<(i32, u32, u32)> {
    let caps = iso_re().captures(text)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    Some((year, month, day))
}

/// Extract a transaction date, or None when no pattern matched — and also
/// when the matched numbers do not form a real calendar date (chrono has
/// no invalid-date value to carry the degenerate case).
pub(crate) fn extract_date(text: &str) -> Option<NaiveDate> {
    let (year, month, day) = [match_month_name, match_day_first, match_iso]
        .iter()
        .find_map(|m| m(text))?;
    NaiveDate::from_ymd_opt(year, month, day)
}
