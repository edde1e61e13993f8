use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use khata_core::{ParsedTransaction, TransactionKind, categorize};
use std::io::Read;
use std::path::PathBuf;

mod config;
mod state;

#[derive(Parser, Debug)]
#[command(name = "khata", version, about = "Khata transaction extraction CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse one free-text blob and print the structured transaction
    Parse {
        /// Text to parse; reads stdin when neither TEXT nor --file is given
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Import an SMS-export CSV and store every parsed transaction
    Import {
        /// Path to the CSV export
        #[arg(long)]
        csv: PathBuf,

        /// Org to store under (default from config)
        #[arg(long)]
        org: Option<String>,
    },

    /// List stored transactions for an org, newest first
    List {
        /// Org to list (default from config)
        #[arg(long)]
        org: Option<String>,

        /// Resume after this record id
        #[arg(long)]
        cursor: Option<String>,

        /// Page size (capped at 100; default from config)
        #[arg(long)]
        limit: Option<usize>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command {
        Command::Parse { text, file, json } => {
            let raw = read_input(text, file)?;
            if raw.trim().is_empty() {
                bail!("nothing to parse (empty input)");
            }
            let txn = khata_extract::parse(&raw);
            if json {
                println!("{}", serde_json::to_string_pretty(&txn)?);
            } else {
                print_parsed(&txn);
            }
        }

        Command::Import { csv, org } => {
            if !csv.exists() {
                bail!("CSV not found: {} (pass --csv <path>)", csv.display());
            }
            let org = org.unwrap_or(cfg.org.default);

            let txns = khata_ingest::parse_sms_export_path(&csv)
                .with_context(|| format!("parsing {}", csv.display()))?;
            if txns.is_empty() {
                bail!("no parsable rows in {}", csv.display());
            }

            let mut store = state::read_store()?;
            for txn in &txns {
                store.insert(&org, txn.clone());
            }
            state::write_store(&store)?;

            println!(
                "Imported {} transactions into org '{}'\n",
                txns.len(),
                org
            );
            for s in khata_ingest::summarize(&txns) {
                println!(
                    "[{}] count={} | debits=₹{:.2} | credits=₹{:.2} | review={}",
                    s.category.tag(),
                    s.transaction_count,
                    s.debit_total,
                    s.credit_total,
                    s.needs_review
                );
            }
        }

        Command::List {
            org,
            cursor,
            limit,
            json,
        } => {
            let org = org.unwrap_or(cfg.org.default);
            let store = state::read_store()?;
            let page = store.list(&org, cursor.as_deref(), limit.or(Some(cfg.list.page_size)))?;

            if json {
                let out = serde_json::json!({
                    "records": page.records,
                    "next_cursor": page.next_cursor,
                    "has_more": page.has_more,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for r in &page.records {
                    println!(
                        "{} | {} | {} ₹{:.2} | conf={} | {}",
                        r.id,
                        r.date,
                        kind_label(r.kind),
                        r.amount,
                        r.confidence,
                        r.description
                    );
                }
                println!(
                    "\n{} of {} records (org '{}')",
                    page.records.len(),
                    store.len(&org),
                    org
                );
                if page.has_more {
                    println!(
                        "more available: --cursor {}",
                        page.next_cursor.as_deref().unwrap_or("")
                    );
                }
            }
        }
    }

    Ok(())
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(t) = text {
        return Ok(t);
    }
    if let Some(p) = file {
        return std::fs::read_to_string(&p).with_context(|| format!("read {}", p.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Debit => "debit",
        TransactionKind::Credit => "credit",
    }
}

fn print_parsed(txn: &ParsedTransaction) {
    println!("Date:        {}", txn.date);
    println!("Description: {}", txn.description);
    println!("Amount:      ₹{:.2} ({})", txn.amount, kind_label(txn.kind));
    match txn.balance {
        Some(b) => println!("Balance:     ₹{:.2}", b),
        None => println!("Balance:     -"),
    }
    println!("Category:    {}", categorize(&txn.description).tag());
    println!("Confidence:  {}/100", txn.confidence);
}
