//! Transaction record types shared across the khata workspace.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a transaction. There is no "unknown" variant: ambiguous or
/// unmarked inputs resolve to `Debit`, and a credit must be explicitly
/// signaled in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "debit")]
    Debit,
    #[serde(rename = "credit")]
    Credit,
}

/// Normalized output of the text extraction engine (source-agnostic).
///
/// Produced fresh per parse call; identity, timestamps and tenant scoping
/// are assigned by the storage layer, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    /// Transaction date. Falls back to the current local date when the text
    /// carries no recognizable date.
    pub date: NaiveDate,
    /// Merchant/narrative with transaction metadata stripped. Never empty;
    /// defaults to "Transaction".
    pub description: String,
    /// Non-negative magnitude. Direction lives in `kind`.
    pub amount: f64,
    pub kind: TransactionKind,
    /// Post-transaction account balance, when the text carried one.
    pub balance: Option<f64>,
    /// Rule-based completeness score, 0-100. Not a probability.
    pub confidence: u8,
}

impl ParsedTransaction {
    /// Returns true if this is a debit.
    pub fn is_debit(&self) -> bool {
        self.kind == TransactionKind::Debit
    }

    /// Amount with direction folded back in: negative for debits.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Debit => -self.amount,
            TransactionKind::Credit => self.amount,
        }
    }
}

/// A stored transaction: a [`ParsedTransaction`] plus the identity and
/// tenant scoping the store assigns on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Store-assigned identifier, unique across the store.
    pub id: String,
    /// Tenant/organization this record belongs to. Supplied by the caller
    /// at insert time, never derived from parsed text.
    pub org_id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub balance: Option<f64>,
    pub confidence: u8,
    /// Store-assigned creation timestamp (UTC).
    pub created_at: DateTime<Utc>,
}

impl TransactionRecord {
    pub fn is_debit(&self) -> bool {
        self.kind == TransactionKind::Debit
    }

    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Debit => -self.amount,
            TransactionKind::Credit => self.amount,
        }
    }
}

/// Closed category set. The extraction engine strips a trailing tag from
/// this set off descriptions; the categorizer maps descriptions onto it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "travel")]
    Travel,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "bills")]
    Bills,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Category::Shopping,
        Category::Food,
        Category::Travel,
        Category::Entertainment,
        Category::Bills,
        Category::Other,
    ];

    /// The tag as it appears in source text ("Shopping", "Food", ...).
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Shopping => "Shopping",
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_amount_direction() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 11).unwrap();
        let txn = ParsedTransaction {
            date,
            description: "STARBUCKS COFFEE MUMBAI".to_string(),
            amount: 420.0,
            kind: TransactionKind::Debit,
            balance: Some(18420.50),
            confidence: 100,
        };
        assert!(txn.is_debit());
        assert_eq!(txn.signed_amount(), -420.0);

        let refund = ParsedTransaction {
            kind: TransactionKind::Credit,
            ..txn
        };
        assert_eq!(refund.signed_amount(), 420.0);
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Debit).unwrap();
        assert_eq!(json, "\"debit\"");
        let back: TransactionKind = serde_json::from_str("\"credit\"").unwrap();
        assert_eq!(back, TransactionKind::Credit);
    }

    #[test]
    fn test_category_tags_roundtrip() {
        for c in Category::ALL {
            assert!(!c.tag().is_empty());
        }
        assert_eq!(Category::Shopping.tag(), "Shopping");
    }
}
