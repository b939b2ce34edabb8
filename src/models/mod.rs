mod donation;
mod earnings;
mod period;
mod transaction;

pub use donation::DonationRecord;
pub use earnings::{EarningsSeries, MonthEarnings, YearEarnings};
pub use period::{MonthName, YearMonth};
pub use transaction::TransactionRecord;

#[cfg(test)]
mod tests;
