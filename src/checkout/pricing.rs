use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Value of one supp unit in cents (R$5.00). Also the minimum donation.
pub const SUPP_UNIT_CENTS: i64 = 500;

/// Tiers offered as one-tap buttons on the checkout.
pub const DEFAULT_TIERS: &[u32] = &[1, 2, 3];

pub fn cents_to_major(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Amount for a discrete tier. Tiers below one resolve to the minimum.
pub fn tier_amount(tier: u32) -> i64 {
    i64::from(tier.max(1)) * SUPP_UNIT_CENTS
}

/// Parse a typed quantity the way a numeric input field reads it.
///
/// Surrounding whitespace is ignored and scientific notation is accepted.
/// Returns `None` for empty or non-numeric text.
pub fn parse_quantity(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// `quantity * 500` in whole cents, or `None` when the quantity is below one
/// or the amount does not fit.
pub fn amount_for_quantity(quantity: Decimal) -> Option<i64> {
    if quantity < Decimal::ONE {
        return None;
    }
    quantity
        .checked_mul(Decimal::from(SUPP_UNIT_CENTS))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Live amount while the custom quantity is being typed.
pub fn preview_amount(text: &str) -> i64 {
    parse_quantity(text)
        .and_then(amount_for_quantity)
        .unwrap_or(SUPP_UNIT_CENTS)
}

/// Quantity and amount once the custom field is confirmed.
/// Empty, non-numeric and under-range input is coerced to one supp.
pub fn resolve_committed(text: &str) -> (Decimal, i64) {
    parse_quantity(text)
        .and_then(|q| amount_for_quantity(q).map(|amount| (q.normalize(), amount)))
        .unwrap_or((Decimal::ONE, SUPP_UNIT_CENTS))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuppEvent {
    SelectTier(u32),
    /// The full text of the custom field after a keystroke.
    EditCustom(String),
    /// Focus left the custom field or Enter was pressed.
    CommitCustom,
}

/// What the donor has chosen so far on the checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppSelection {
    pub amount_cents: i64,
    pub custom_text: String,
}

impl Default for SuppSelection {
    fn default() -> Self {
        Self {
            amount_cents: SUPP_UNIT_CENTS,
            custom_text: String::new(),
        }
    }
}

impl SuppSelection {
    pub fn reduce(self, event: SuppEvent) -> Self {
        match event {
            SuppEvent::SelectTier(tier) => Self {
                amount_cents: tier_amount(tier),
                custom_text: String::new(),
            },
            SuppEvent::EditCustom(text) => Self {
                amount_cents: preview_amount(&text),
                custom_text: text,
            },
            SuppEvent::CommitCustom => {
                let (quantity, amount_cents) = resolve_committed(&self.custom_text);
                Self {
                    amount_cents,
                    custom_text: quantity.to_string(),
                }
            }
        }
    }

    /// A tier is highlighted when the current amount is exactly its price.
    pub fn is_tier_selected(&self, tier: u32) -> bool {
        self.amount_cents == tier_amount(tier)
    }

    pub fn amount_major(&self) -> Decimal {
        cents_to_major(self.amount_cents)
    }
}
