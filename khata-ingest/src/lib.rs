//! khata-ingest: batch ingestion of SMS-export CSVs and post-import
//! category summaries.

pub mod sms_csv;
pub mod summary;

pub use sms_csv::{parse_sms_export, parse_sms_export_path};
pub use summary::{CategorySummary, REVIEW_THRESHOLD, summarize};
