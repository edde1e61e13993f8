//! Field extractors.
//!
//! Each extractor re-scans the trimmed input with its own fixed-priority
//! pattern chain and short-circuits on the first match. They share no
//! intermediate state: the supported dialects interleave fields in
//! arbitrary order, so every field is hunted independently.

pub(crate) mod amount;
pub(crate) mod balance;
pub(crate) mod confidence;
pub(crate) mod date;
pub(crate) mod description;
pub(crate) mod kind;
