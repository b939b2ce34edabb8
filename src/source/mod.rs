mod csv_source;

use anyhow::Result;

use crate::models::{DonationRecord, TransactionRecord};

pub(crate) use csv_source::CsvSource;

/// Where raw records come from. Implementations hand back the full,
/// materialized collections; the aggregation code never sees a partial list.
pub(crate) trait RecordSource {
    fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>>;
    fn fetch_donations(&self) -> Result<Vec<DonationRecord>>;
}
