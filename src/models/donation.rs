use rust_decimal::Decimal;

/// An application-level donation as recorded by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationRecord {
    pub id: String,
    /// Raw ISO-8601 timestamp, interpreted only when counting.
    pub created_at: String,
    /// Minor currency units (cents).
    pub amount: i64,
    pub donor_name: String,
    pub donor_email: String,
    pub comment: String,
    pub creator_user: String,
    pub session_id: String,
    pub status: String,
}

impl DonationRecord {
    pub fn amount_major(&self) -> Decimal {
        Decimal::new(self.amount, 2)
    }
}
