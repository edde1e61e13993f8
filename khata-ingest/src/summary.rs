//! Per-category summaries of a parsed batch, for post-import review.

use khata_core::{Category, ParsedTransaction, categorize};
use std::collections::HashMap;

/// Parses scoring below this are flagged for manual review.
pub const REVIEW_THRESHOLD: u8 = 50;

/// Aggregate of one category within an imported batch.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub transaction_count: usize,
    pub debit_total: f64,
    pub credit_total: f64,
    /// How many parses scored below [`REVIEW_THRESHOLD`].
    pub needs_review: usize,
}

/// Group a parsed batch by category, biggest debit bucket first.
pub fn summarize(txns: &[ParsedTransaction]) -> Vec<CategorySummary> {
    let mut groups: HashMap<Category, Vec<&ParsedTransaction>> = HashMap::new();
    for txn in txns {
        groups
            .entry(categorize(&txn.description))
            .or_default()
            .push(txn);
    }

    let mut out: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(category, items)| {
            let debit_total = items.iter().filter(|t| t.is_debit()).map(|t| t.amount).sum();
            let credit_total = items.iter().filter(|t| !t.is_debit()).map(|t| t.amount).sum();
            let needs_review = items
                .iter()
                .filter(|t| t.confidence < REVIEW_THRESHOLD)
                .count();
            CategorySummary {
                category,
                transaction_count: items.len(),
                debit_total,
                credit_total,
                needs_review,
            }
        })
        .collect();

    // Sort by debit total descending
    out.sort_by(|a, b| b.debit_total.partial_cmp(&a.debit_total).unwrap());
    out
}
