//! Amount extraction.
//!
//! Priority order, first match wins:
//! 1. `Amount:` label + signed number
//! 2. `₹` + signed number
//! 3. bare number immediately followed by a debit marker (`debited`/`Dr`);
//!    sign forced negative
//! 4. first standalone number-like token anywhere — least reliable, may
//!    grab order numbers or the numeric part of a date
//! 5. nothing → 0
//!
//! The returned amount keeps its raw sign; callers store the absolute
//! value and feed the sign to debit/credit determination.

use regex::Regex;
use std::sync::OnceLock;

// Optional sign, comma-grouped digits, optional two-decimal fraction.
const SIGNED_NUM: &str = r"-?\d{1,3}(?:,\d{3})*(?:\.\d{2})?";
const BARE_NUM: &str = r"\d{1,3}(?:,\d{3})*(?:\.\d{2})?";

fn labeled_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)Amount:\s*({SIGNED_NUM})")).expect("invalid labeled amount regex")
    })
}

fn rupee_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"₹\s*({SIGNED_NUM})")).expect("invalid rupee amount regex")
    })
}

fn debit_suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)({SIGNED_NUM})\s*(?:debited|dr)\b"))
            .expect("invalid debit suffix regex")
    })
}

fn bare_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"\b({BARE_NUM})\b")).expect("invalid bare number regex")
    })
}

fn parse_num(s: &str) -> f64 {
    s.replace(',', "").parse().unwrap_or(0.0)
}

/// Signed raw amount; 0.0 when nothing number-like was found.
pub(crate) fn extract_amount(text: &str) -> f64 {
    if let Some(caps) = labeled_amount_re().captures(text) {
        return parse_num(&caps[1]);
    }
    if let Some(caps) = rupee_amount_re().captures(text) {
        return parse_num(&caps[1]);
    }
    if let Some(caps) = debit_suffix_re().captures(text) {
        let value = parse_num(&caps[1]);
        // a debit marker implies a negative raw amount
        return if value > 0.0 { -value } else { value };
    }
    if let Some(caps) = bare_number_re().captures(text) {
        return parse_num(&caps[1]);
    }
    0.0
}
