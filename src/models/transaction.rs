use rust_decimal::Decimal;

/// Reporting category the processor assigns to revenue entries.
pub const CHARGE_CATEGORY: &str = "charge";

/// One ledger entry from the payment processor's balance history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Unix seconds at which the funds become available.
    pub available_on: i64,
    /// Minor currency units (cents).
    pub amount: i64,
    pub reporting_category: String,
}

impl TransactionRecord {
    pub fn new(available_on: i64, amount: i64, reporting_category: impl Into<String>) -> Self {
        Self {
            available_on,
            amount,
            reporting_category: reporting_category.into(),
        }
    }

    pub fn is_charge(&self) -> bool {
        self.reporting_category == CHARGE_CATEGORY
    }

    /// Amount in major currency units, exact.
    pub fn amount_major(&self) -> Decimal {
        Decimal::new(self.amount, 2)
    }
}
