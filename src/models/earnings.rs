use rust_decimal::Decimal;

use super::MonthName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthEarnings {
    pub month: MonthName,
    pub earnings: Decimal,
}

impl MonthEarnings {
    pub fn zero(month: MonthName) -> Self {
        Self {
            month,
            earnings: Decimal::ZERO,
        }
    }
}

/// Earnings of one calendar year, holding only months that saw activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearEarnings {
    pub year: i32,
    pub months: Vec<MonthEarnings>,
}

impl YearEarnings {
    pub fn total(&self) -> Decimal {
        self.months.iter().map(|m| m.earnings).sum()
    }
}

/// Ordered by year, at most one entry per (year, month).
pub type EarningsSeries = Vec<YearEarnings>;
