//! Donation checkout: supp-unit pricing, the checkout selection state and
//! the donor form that produces a checkout request.

mod form;
mod pricing;

pub use form::{checkout_request, CheckoutRequest, DonorForm, FormField};
pub use pricing::{
    cents_to_major, resolve_committed, tier_amount, SuppEvent, SuppSelection, DEFAULT_TIERS,
};

#[cfg(test)]
use pricing::{amount_for_quantity, parse_quantity, preview_amount, SUPP_UNIT_CENTS};

#[cfg(test)]
mod tests;
