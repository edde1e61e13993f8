//! Parse SMS-backup CSV exports into transactions.
//!
//! Backup apps disagree on column names, so the message column is located
//! by header (`body`, `message`, or `text`, case-insensitive) and every
//! non-empty body runs through the extraction engine. Rows without a body
//! are skipped, not errors.

use anyhow::{Context, Result, bail};
use khata_core::ParsedTransaction;
use std::io::Read;
use std::path::Path;

const BODY_HEADERS: [&str; 3] = ["body", "message", "text"];

/// Parse an SMS export from any reader.
pub fn parse_sms_export<R: Read>(reader: R) -> Result<Vec<ParsedTransaction>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers().context("reading csv headers")?.clone();
    let Some(body_idx) = headers
        .iter()
        .position(|h| BODY_HEADERS.contains(&h.trim().to_lowercase().as_str()))
    else {
        bail!("no body/message/text column in header {:?}", headers);
    };

    let mut txns = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let body = record.get(body_idx).unwrap_or("").trim();
        if body.is_empty() {
            continue;
        }
        txns.push(khata_extract::parse(body));
    }

    Ok(txns)
}

/// Parse an SMS export file.
pub fn parse_sms_export_path(path: impl AsRef<Path>) -> Result<Vec<ParsedTransaction>> {
    let file = std::fs::File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    parse_sms_export(file)
}
