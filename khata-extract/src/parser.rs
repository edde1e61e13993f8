//! The transaction parser: one free-text blob in, one structured record
//! out, always.

use chrono::Local;
use khata_core::ParsedTransaction;

use crate::extractors::confidence::{self, FieldValidity};
use crate::extractors::{amount, balance, date, description, kind};

/// Parse one free-text transaction blob.
///
/// Never fails, for any input: malformed or empty text degrades to
/// defaults (current local date, zero amount, "Transaction", no balance)
/// and the confidence score carries the degradation. Pure and
/// synchronous; safe to call from any number of threads.
pub fn parse(raw: &str) -> ParsedTransaction {
    let text = raw.trim();
    let lower = text.to_lowercase();

    let extracted_date = date::extract_date(text);
    let raw_amount = amount::extract_amount(text);
    let kind = kind::extract_kind(&lower, raw_amount);
    let description = description::extract_description(text);
    let balance = balance::extract_balance(text);

    let amount = raw_amount.abs();
    let validity = FieldValidity {
        // the current-date fallback below is a default, not an extraction,
        // and scores nothing
        date: extracted_date.is_some(),
        amount: amount > 0.0,
        description: description.chars().count() > 3 && description != description::FALLBACK,
        balance: balance.is_some_and(|b| b > 0.0),
    };
    let confidence = confidence::score(validity);

    ParsedTransaction {
        date: extracted_date.unwrap_or_else(|| Local::now().date_naive()),
        description,
        amount,
        kind,
        balance,
        confidence,
    }
}
