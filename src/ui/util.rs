use rust_decimal::{Decimal, RoundingStrategy};

use crate::checkout::{cents_to_major, tier_amount};

/// Format a decimal amount in reais with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"R$1,234,567.89"`
pub(crate) fn format_brl(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-R${with_commas}.{dec_part}")
    } else {
        format!("R${with_commas}.{dec_part}")
    }
}

/// Cents as a plain two-decimal amount, e.g. `1500` → `"R$ 15.00"`.
pub(crate) fn format_cents(cents: i64) -> String {
    format!("R$ {:.2}", cents_to_major(cents))
}

/// Label for a tier button, e.g. `"2x Supps (R$ 10.00)"`.
pub(crate) fn tier_label(tier: u32) -> String {
    format!("{tier}x Supps ({})", format_cents(tier_amount(tier)))
}

/// Month-over-month change with one decimal, e.g. `"+12.5%"`.
pub(crate) fn format_delta(delta: Decimal) -> String {
    let rounded = delta.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    let sign = if delta >= Decimal::ZERO { "+" } else { "" };
    format!("{sign}{rounded:.1}%")
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}
