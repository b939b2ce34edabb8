use log::warn;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::AggregationPolicy;
use crate::models::{EarningsSeries, MonthEarnings, MonthName, TransactionRecord, YearEarnings};

/// Sum qualifying transactions into per-year, per-month earnings.
///
/// Years and months without a contributing record are absent.
pub fn group_by_month(
    records: &[TransactionRecord],
    policy: &AggregationPolicy,
) -> EarningsSeries {
    let mut by_year: BTreeMap<i32, BTreeMap<MonthName, Decimal>> = BTreeMap::new();

    for record in records.iter().filter(|r| policy.counts(r)) {
        let Some(period) = policy.zone.month_of_timestamp(record.available_on) else {
            warn!(
                "Skipping transaction with out-of-range timestamp {}",
                record.available_on
            );
            continue;
        };
        *by_year
            .entry(period.year)
            .or_default()
            .entry(period.month)
            .or_insert(Decimal::ZERO) += record.amount_major();
    }

    by_year
        .into_iter()
        .map(|(year, months)| YearEarnings {
            year,
            months: months
                .into_iter()
                .map(|(month, earnings)| MonthEarnings { month, earnings })
                .collect(),
        })
        .collect()
}

/// January through December, all at zero.
pub fn month_template() -> Vec<MonthEarnings> {
    MonthName::all().iter().map(|m| MonthEarnings::zero(*m)).collect()
}

/// Replace each template month with the entry of the same name from `actual`.
pub fn merge_months(template: &[MonthEarnings], actual: &[MonthEarnings]) -> Vec<MonthEarnings> {
    template
        .iter()
        .map(|slot| {
            actual
                .iter()
                .find(|item| item.month == slot.month)
                .copied()
                .unwrap_or(*slot)
        })
        .collect()
}

/// Twelve chart bars for `year`; a year with no earnings is all zeros.
pub fn chart_for_year(series: &EarningsSeries, year: i32) -> Vec<MonthEarnings> {
    let months = series
        .iter()
        .find(|y| y.year == year)
        .map(|y| y.months.as_slice())
        .unwrap_or(&[]);
    merge_months(&month_template(), months)
}

/// Years offered by the year picker, newest first.
pub fn selectable_years(current_year: i32) -> Vec<i32> {
    (0..10).map(|i| current_year - i).collect()
}
