use rust_decimal::Decimal;
use std::collections::HashMap;

use super::{group_by_month, AggregationPolicy, BucketZone};
use crate::models::{DonationRecord, EarningsSeries, TransactionRecord, YearMonth};

/// Revenue and transaction count of a single month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthlyTally {
    pub earnings: Decimal,
    pub donations: u64,
}

/// Everything the dashboard tiles and chart need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub series: EarningsSeries,
    pub total_revenue: Decimal,
    /// Number of qualifying transactions, not application-level donations.
    pub total_donations: usize,
    pub revenue_percent_change: Decimal,
    pub donations_percent_change: Decimal,
    /// Donation records created during the current calendar month.
    pub this_month_donation_count: usize,
}

pub fn tally_by_month(
    records: &[TransactionRecord],
    policy: &AggregationPolicy,
) -> HashMap<YearMonth, MonthlyTally> {
    let mut tallies: HashMap<YearMonth, MonthlyTally> = HashMap::new();
    for record in records.iter().filter(|r| policy.counts(r)) {
        if let Some(period) = policy.zone.month_of_timestamp(record.available_on) {
            let tally = tallies.entry(period).or_default();
            tally.earnings += record.amount_major();
            tally.donations += 1;
        }
    }
    tallies
}

/// Percentage change from `previous` to `current`; zero when `previous` is zero.
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return Decimal::ZERO;
    }
    current
        .checked_sub(previous)
        .and_then(|diff| diff.checked_div(previous))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

pub fn this_month_donation_count(
    donations: &[DonationRecord],
    zone: BucketZone,
    today: YearMonth,
) -> usize {
    donations
        .iter()
        .filter(|d| zone.month_of_iso(&d.created_at) == Some(today))
        .count()
}

pub fn summarize(
    transactions: &[TransactionRecord],
    donations: &[DonationRecord],
    policy: &AggregationPolicy,
    today: YearMonth,
) -> DashboardSummary {
    let qualifying: Vec<&TransactionRecord> =
        transactions.iter().filter(|r| policy.counts(r)).collect();
    let total_revenue: Decimal = qualifying.iter().map(|r| r.amount_major()).sum();

    let tallies = tally_by_month(transactions, policy);
    let current = tallies.get(&today).copied().unwrap_or_default();
    let previous = tallies.get(&today.previous()).copied().unwrap_or_default();

    DashboardSummary {
        series: group_by_month(transactions, policy),
        total_revenue,
        total_donations: qualifying.len(),
        revenue_percent_change: percent_change(current.earnings, previous.earnings),
        donations_percent_change: percent_change(
            Decimal::from(current.donations),
            Decimal::from(previous.donations),
        ),
        this_month_donation_count: this_month_donation_count(donations, policy.zone, today),
    }
}
