//! Post-transaction balance extraction.
//!
//! Three label families, each tried with a comma-grouped variant first and
//! a no-comma variant second, in one fixed order of six patterns. First
//! match wins. No match means the balance is absent, not zero.

use regex::Regex;
use std::sync::OnceLock;

// The comma variant requires at least one ,ddd group; otherwise it would
// partial-match the leading digits of an uncommaed number and the no-comma
// variant could never win.
const COMMA_NUM: &str = r"\d{1,3}(?:,\d{3})+(?:\.\d{2})?";
const PLAIN_NUM: &str = r"\d+(?:\.\d{2})?";

fn balance_res() -> &'static Vec<Regex> {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        let mut out = Vec::with_capacity(6);
        for prefix in [
            r"(?i)Balance after transaction:\s*",
            r"(?i)Available\s+Balance\s*→\s*₹\s*",
            r"(?i)\bBal\s+",
        ] {
            for num in [COMMA_NUM, PLAIN_NUM] {
                out.push(
                    Regex::new(&format!("{prefix}({num})")).expect("invalid balance regex"),
                );
            }
        }
        out
    })
}

pub(crate) fn extract_balance(text: &str) -> Option<f64> {
    for re in balance_res() {
        if let Some(caps) = re.captures(text) {
            return Some(caps[1].replace(',', "").parse().unwrap_or(0.0));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_after_transaction_with_commas() {
        assert_eq!(
            extract_balance("Balance after transaction: 18,420.50"),
            Some(18420.50)
        );
    }

    #[test]
    fn test_balance_after_transaction_plain() {
        assert_eq!(
            extract_balance("balance after transaction: 18420.50"),
            Some(18420.50)
        );
    }

    #[test]
    fn test_available_balance_arrow() {
        assert_eq!(
            extract_balance("Available Balance → ₹17,170.50"),
            Some(17170.50)
        );
        assert_eq!(extract_balance("Available Balance → ₹950"), Some(950.0));
    }

    #[test]
    fn test_bal_short_form() {
        assert_eq!(extract_balance("₹2,999.00 Dr Bal 14171.50"), Some(14171.50));
        assert_eq!(extract_balance("Bal 1,171.50 Shopping"), Some(1171.50));
    }

    #[test]
    fn test_no_balance_is_absent() {
        assert_eq!(extract_balance("₹1,250.00 debited"), None);
        assert_eq!(extract_balance(""), None);
        // "Balance" alone is not the short form
        assert_eq!(extract_balance("low balance warning"), None);
    }

    #[test]
    fn test_zero_balance_is_still_a_match() {
        assert_eq!(extract_balance("Bal 0"), Some(0.0));
    }
}
