//! Earnings aggregation for the creator dashboard.
//!
//! Everything here is a pure function of the record lists it is given plus an
//! explicit "today"; nothing is cached between calls.

mod policy;
mod series;
mod summary;

pub use policy::{AggregationPolicy, BucketZone};
pub use series::{chart_for_year, group_by_month, selectable_years};
pub use summary::{summarize, DashboardSummary};

#[cfg(test)]
use series::{merge_months, month_template};
#[cfg(test)]
use summary::{percent_change, tally_by_month, this_month_donation_count};
