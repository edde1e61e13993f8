//! Description extraction.
//!
//! Start from the full trimmed text and progressively strip everything the
//! other extractors recognize — ids, order numbers, dates, amounts,
//! balances, field labels — then collapse whitespace. Broader numeric
//! patterns must go before the leftover text is judged empty, otherwise
//! numeric noise would count as a legitimate description.
//!
//! Stripping follows one fixed order; a marker word orphaned by an earlier
//! removal (e.g. `debited` after its `₹` amount is gone) stays in the
//! output.

use khata_core::Category;
use regex::Regex;
use std::sync::OnceLock;

/// Substituted when stripping leaves nothing.
pub(crate) const FALLBACK: &str = "Transaction";

fn txn_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)txn\w+").expect("invalid txn token regex"))
}

fn order_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#[\d-]+").expect("invalid order number regex"))
}

fn month_name_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?:Date:\s*)?\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{4}",
        )
        .expect("invalid month-name date strip regex")
    })
}

fn slash_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{1,2}/\d{1,2}/\d{4}").expect("invalid slash date strip regex"))
}

fn iso_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{4}-\d{1,2}-\d{1,2}").expect("invalid iso date strip regex"))
}

fn labeled_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)Amount:\s*-?\d{1,3}(?:,\d{3})*(?:\.\d{2})?")
            .expect("invalid labeled amount strip regex")
    })
}

fn rupee_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"₹\s*-?\d{1,3}(?:,\d{3})*(?:\.\d{2})?")
            .expect("invalid rupee amount strip regex")
    })
}

fn marker_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)-?\d{1,3}(?:,\d{3})*(?:\.\d{2})?\s*(?:debited|credited|dr|cr)\b")
            .expect("invalid marker amount strip regex")
    })
}

fn balance_after_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)Balance after transaction:\s*[\d,]+(?:\.\d{1,2})?")
            .expect("invalid balance-after strip regex")
    })
}

fn available_balance_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)Available\s+Balance\s*→\s*₹?\s*[\d,]+(?:\.\d{1,2})?")
            .expect("invalid available-balance strip regex")
    })
}

fn bal_short_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\bBal\s+[\d,]+(?:\.\d{1,2})?").expect("invalid bal strip regex")
    })
}

fn date_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)Date:\s*").expect("invalid date label regex"))
}

fn description_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)Description:\s*").expect("invalid description label regex"))
}

fn trailing_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let tags = Category::ALL.map(|c| c.tag()).join("|");
        Regex::new(&format!(r"(?i)\b(?:{tags})\s*$")).expect("invalid trailing tag regex")
    })
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("invalid whitespace regex"))
}

pub(crate) fn extract_description(text: &str) -> String {
    let mut s = text.to_string();
    for re in [
        txn_token_re(),
        order_number_re(),
        month_name_date_re(),
        slash_date_re(),
        iso_date_re(),
        labeled_amount_re(),
        rupee_amount_re(),
        marker_amount_re(),
        balance_after_re(),
        available_balance_re(),
        bal_short_re(),
        date_label_re(),
        description_label_re(),
    ] {
        s = re.replace_all(&s, "").into_owned();
    }
    // glyphs: the arrow goes away, asterisks become spaces so the tokens
    // around them stay separated
    let s = s.replace('→', "");
    let s = s.replace('*', " ");
    let s = trailing_tag_re().replace(&s, "").into_owned();

    let s = whitespace_re().replace_all(&s, " ").trim().to_string();
    if s.is_empty() { FALLBACK.to_string() } else { s }
}
