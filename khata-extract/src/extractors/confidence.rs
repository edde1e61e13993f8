//! Rule-based confidence scoring.
//!
//! A completeness heuristic over the four extracted fields, not a
//! calibrated probability. Weights: date 30, amount 30, description 25,
//! balance 15.

/// Validity of each extracted field, judged by the parser:
/// date ⇔ a real calendar date was extracted (the current-date fallback
/// does not count); amount ⇔ magnitude > 0; description ⇔ longer than 3
/// characters and not the fallback; balance ⇔ present and > 0.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldValidity {
    pub date: bool,
    pub amount: bool,
    pub description: bool,
    pub balance: bool,
}

/// Score in 0..=100.
///
/// All four fields valid is a flat 100 — an explicit award kept separate
/// from the weighted sum, so a future weight change cannot break the
/// all-valid guarantee.
pub(crate) fn score(v: FieldValidity) -> u8 {
    if v.date && v.amount && v.description && v.balance {
        return 100;
    }

    let mut total: i32 = 0;
    if v.date {
        total += 30;
    }
    if v.amount {
        total += 30;
    }
    if v.description {
        total += 25;
    }
    if v.balance {
        total += 15;
    }
    total.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validity(date: bool, amount: bool, description: bool, balance: bool) -> FieldValidity {
        FieldValidity {
            date,
            amount,
            description,
            balance,
        }
    }

    #[test]
    fn test_all_valid_is_exactly_100() {
        assert_eq!(score(validity(true, true, true, true)), 100);
    }

    #[test]
    fn test_weighted_sums() {
        assert_eq!(score(validity(true, true, true, false)), 85);
        assert_eq!(score(validity(true, true, false, false)), 60);
        assert_eq!(score(validity(false, true, true, true)), 70);
        assert_eq!(score(validity(false, false, false, true)), 15);
    }

    #[test]
    fn test_nothing_valid_is_zero() {
        assert_eq!(score(validity(false, false, false, false)), 0);
    }
}
