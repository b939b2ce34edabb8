use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use super::RecordSource;
use crate::models::{DonationRecord, TransactionRecord};

/// Records read from CSV exports of the backend's transactions and donations.
#[derive(Debug, Clone)]
pub(crate) struct CsvSource {
    pub(crate) transactions_path: PathBuf,
    pub(crate) donations_path: PathBuf,
}

impl CsvSource {
    pub(crate) fn new(transactions_path: PathBuf, donations_path: PathBuf) -> Self {
        Self {
            transactions_path,
            donations_path,
        }
    }
}

impl RecordSource for CsvSource {
    fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>> {
        let Some(table) = read_table(&self.transactions_path)? else {
            return Ok(Vec::new());
        };
        let records = parse_transactions(&table)
            .with_context(|| format!("In {}", self.transactions_path.display()))?;
        debug!("Loaded {} transactions", records.len());
        Ok(records)
    }

    fn fetch_donations(&self) -> Result<Vec<DonationRecord>> {
        let Some(table) = read_table(&self.donations_path)? else {
            return Ok(Vec::new());
        };
        let records = parse_donations(&table)
            .with_context(|| format!("In {}", self.donations_path.display()))?;
        debug!("Loaded {} donations", records.len());
        Ok(records)
    }
}

#[derive(Debug)]
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Index of a column by header name, ignoring case and spacing.
    fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| normalize_header(h) == name)
    }

    fn required(&self, name: &str) -> Result<usize> {
        self.column(name)
            .ok_or_else(|| anyhow::anyhow!("Missing required column '{name}'"))
    }
}

fn normalize_header(header: &str) -> String {
    header
        .trim()
        .trim_start_matches('\u{feff}')
        .to_lowercase()
        .replace([' ', '-'], "_")
}

/// Read a CSV export. A missing file is an empty collection, not an error.
fn read_table(path: &Path) -> Result<Option<Table>> {
    if !path.exists() {
        info!("No export at {}, treating as empty", path.display());
        return Ok(None);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers: Vec<String> = rdr
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.context("Failed to read CSV record")?;
        let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        if row.iter().all(|field| field.is_empty()) {
            continue;
        }
        rows.push(row);
    }

    Ok(Some(Table { headers, rows }))
}

fn field(row: &[String], column: Option<usize>) -> String {
    column
        .and_then(|c| row.get(c))
        .cloned()
        .unwrap_or_default()
}

fn parse_integer(s: &str) -> Result<i64> {
    let cleaned = s.trim().trim_start_matches('+').replace(',', "");
    cleaned
        .parse::<i64>()
        .with_context(|| format!("Failed to parse '{s}' as an integer"))
}

fn parse_transactions(table: &Table) -> Result<Vec<TransactionRecord>> {
    let available_on = table.required("available_on")?;
    let amount = table.required("amount")?;
    let category = table.column("reporting_category");

    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let available_on = parse_integer(&field(row, Some(available_on)))
                .with_context(|| format!("Row {}: bad available_on", i + 1))?;
            let amount = parse_integer(&field(row, Some(amount)))
                .with_context(|| format!("Row {}: bad amount", i + 1))?;
            Ok(TransactionRecord::new(available_on, amount, field(row, category)))
        })
        .collect()
}

fn parse_donations(table: &Table) -> Result<Vec<DonationRecord>> {
    let created_at = table.required("created_at")?;
    let amount = table.required("amount")?;
    let id = table.column("id");
    let donor_name = table.column("donor_name");
    let donor_email = table.column("donor_email");
    let comment = table.column("comment");
    let creator_user = table.column("creator_user");
    let session_id = table.column("session_id");
    let status = table.column("status");

    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Ok(DonationRecord {
                id: field(row, id),
                created_at: field(row, Some(created_at)),
                amount: parse_integer(&field(row, Some(amount)))
                    .with_context(|| format!("Row {}: bad amount", i + 1))?,
                donor_name: field(row, donor_name),
                donor_email: field(row, donor_email),
                comment: field(row, comment),
                creator_user: field(row, creator_user),
                session_id: field(row, session_id),
                status: field(row, status),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "csv_source_tests.rs"]
mod tests;
