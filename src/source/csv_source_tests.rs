#![allow(clippy::unwrap_used)]

use super::*;
use std::io::Write;

fn make_csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn source_for(transactions: &Path, donations: &Path) -> CsvSource {
    CsvSource::new(transactions.to_path_buf(), donations.to_path_buf())
}

fn missing_path() -> PathBuf {
    let dir = tempfile::tempdir().unwrap();
    dir.path().join("does-not-exist.csv")
}

// ── parse_integer ─────────────────────────────────────────────

#[test]
fn test_parse_integer() {
    assert_eq!(parse_integer("1500").unwrap(), 1500);
    assert_eq!(parse_integer(" -30 ").unwrap(), -30);
    assert_eq!(parse_integer("+700").unwrap(), 700);
    assert_eq!(parse_integer("1,000").unwrap(), 1000);
    assert!(parse_integer("12.50").is_err());
    assert!(parse_integer("").is_err());
}

#[test]
fn test_normalize_header() {
    assert_eq!(normalize_header(" Available On "), "available_on");
    assert_eq!(normalize_header("reporting-category"), "reporting_category");
    assert_eq!(normalize_header("\u{feff}amount"), "amount");
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_fetch_transactions() {
    let file = make_csv_file(
        "available_on,amount,reporting_category\n\
         1704067200,1000,charge\n\
         1706745600,-30,fee\n",
    );
    let source = source_for(file.path(), &missing_path());
    let records = source.fetch_transactions().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], TransactionRecord::new(1_704_067_200, 1000, "charge"));
    assert_eq!(records[1].reporting_category, "fee");
    assert_eq!(records[1].amount, -30);
}

#[test]
fn test_fetch_transactions_columns_by_name() {
    let file = make_csv_file(
        "id,Reporting Category,Amount,Available On\n\
         txn_1,charge,2500,1704067200\n",
    );
    let source = source_for(file.path(), &missing_path());
    let records = source.fetch_transactions().unwrap();
    assert_eq!(records, vec![TransactionRecord::new(1_704_067_200, 2500, "charge")]);
}

#[test]
fn test_fetch_transactions_without_category_column() {
    let file = make_csv_file("available_on,amount\n1704067200,1000\n");
    let source = source_for(file.path(), &missing_path());
    let records = source.fetch_transactions().unwrap();
    assert_eq!(records[0].reporting_category, "");
}

#[test]
fn test_fetch_transactions_skips_blank_rows() {
    let file = make_csv_file("available_on,amount\n1704067200,1000\n,\n1704067201,5\n");
    let source = source_for(file.path(), &missing_path());
    assert_eq!(source.fetch_transactions().unwrap().len(), 2);
}

#[test]
fn test_fetch_transactions_bad_row_reports_row_number() {
    let file = make_csv_file("available_on,amount\n1704067200,1000\nsoon,5\n");
    let source = source_for(file.path(), &missing_path());
    let err = source.fetch_transactions().unwrap_err();
    assert!(format!("{err:#}").contains("Row 2"));
}

#[test]
fn test_fetch_transactions_missing_column() {
    let file = make_csv_file("date,amount\n2024-01-01,1000\n");
    let source = source_for(file.path(), &missing_path());
    let err = source.fetch_transactions().unwrap_err();
    assert!(format!("{err:#}").contains("available_on"));
}

#[test]
fn test_missing_files_are_empty() {
    let source = source_for(&missing_path(), &missing_path());
    assert!(source.fetch_transactions().unwrap().is_empty());
    assert!(source.fetch_donations().unwrap().is_empty());
}

// ── Donations ─────────────────────────────────────────────────

#[test]
fn test_fetch_donations() {
    let file = make_csv_file(
        "id,created_at,amount,donor_name,donor_email,comment,creator_user,session_id,status\n\
         7,2024-06-01T10:00:00Z,1500,Ana,ana@example.com,\"Great, really\",maria,cs_1,paid\n",
    );
    let source = source_for(&missing_path(), file.path());
    let donations = source.fetch_donations().unwrap();
    assert_eq!(donations.len(), 1);
    let d = &donations[0];
    assert_eq!(d.id, "7");
    assert_eq!(d.created_at, "2024-06-01T10:00:00Z");
    assert_eq!(d.amount, 1500);
    assert_eq!(d.donor_name, "Ana");
    assert_eq!(d.comment, "Great, really");
    assert_eq!(d.creator_user, "maria");
    assert_eq!(d.session_id, "cs_1");
    assert_eq!(d.status, "paid");
}

#[test]
fn test_fetch_donations_minimal_columns() {
    let file = make_csv_file("created_at,amount\n2024-06-01,500\n");
    let source = source_for(&missing_path(), file.path());
    let donations = source.fetch_donations().unwrap();
    assert_eq!(donations[0].amount, 500);
    assert!(donations[0].donor_name.is_empty());
}

#[test]
fn test_fetch_donations_bad_amount() {
    let file = make_csv_file("created_at,amount\n2024-06-01,five\n");
    let source = source_for(&missing_path(), file.path());
    assert!(source.fetch_donations().is_err());
}
