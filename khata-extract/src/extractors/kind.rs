//! Debit/credit determination.
//!
//! Works on the lowercased text plus the signed raw amount from amount
//! extraction. Explicit markers outrank the sign; debit outranks credit;
//! the unmarked default is debit. Credit is never inferred from a
//! positive amount.

use khata_core::TransactionKind;
use regex::Regex;
use std::sync::OnceLock;

// `dr`/`cr` count only as standalone tokens bounded by spaces or a
// trailing newline ("Dr." does not qualify).
fn debit_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" dr | dr\n").expect("invalid debit token regex"))
}

fn credit_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" cr | cr\n").expect("invalid credit token regex"))
}

pub(crate) fn extract_kind(lower: &str, raw_amount: f64) -> TransactionKind {
    if lower.contains("debited") || debit_token_re().is_match(lower) {
        return TransactionKind::Debit;
    }
    if lower.contains("credited") || credit_token_re().is_match(lower) {
        return TransactionKind::Credit;
    }
    if raw_amount < 0.0 {
        return TransactionKind::Debit;
    }
    TransactionKind::Debit
}
