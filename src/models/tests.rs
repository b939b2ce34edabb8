#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── TransactionRecord ─────────────────────────────────────────

#[test]
fn test_charge_detection() {
    assert!(TransactionRecord::new(0, 500, "charge").is_charge());
    assert!(!TransactionRecord::new(0, -30, "fee").is_charge());
    assert!(!TransactionRecord::new(0, 500, "Charge").is_charge());
    assert!(!TransactionRecord::new(0, 500, "").is_charge());
}

#[test]
fn test_transaction_amount_major() {
    assert_eq!(TransactionRecord::new(0, 1000, "charge").amount_major(), dec!(10.00));
    assert_eq!(TransactionRecord::new(0, 1, "charge").amount_major(), dec!(0.01));
    assert_eq!(TransactionRecord::new(0, -250, "refund").amount_major(), dec!(-2.50));
    assert_eq!(TransactionRecord::new(0, 0, "charge").amount_major(), Decimal::ZERO);
}

#[test]
fn test_donation_amount_major() {
    let donation = DonationRecord {
        amount: 1500,
        ..DonationRecord::default()
    };
    assert_eq!(donation.amount_major(), dec!(15));
}

// ── MonthName ─────────────────────────────────────────────────

#[test]
fn test_month_lookup_table() {
    assert_eq!(MonthName::from_index0(0), Some(MonthName::January));
    assert_eq!(MonthName::from_index0(11), Some(MonthName::December));
    assert_eq!(MonthName::from_index0(12), None);
    assert_eq!(MonthName::all().len(), 12);
    for (i, m) in MonthName::all().iter().enumerate() {
        assert_eq!(m.index0() as usize, i);
    }
}

#[test]
fn test_month_names() {
    assert_eq!(MonthName::January.as_str(), "January");
    assert_eq!(MonthName::September.to_string(), "September");
    assert_eq!(MonthName::May.short(), "May");
    assert_eq!(MonthName::December.short(), "Dec");
}

#[test]
fn test_month_parse() {
    assert_eq!(MonthName::parse("march"), Some(MonthName::March));
    assert_eq!(MonthName::parse(" JULY "), Some(MonthName::July));
    assert_eq!(MonthName::parse("Jul"), None);
    assert_eq!(MonthName::parse(""), None);
}

// ── YearMonth ─────────────────────────────────────────────────

#[test]
fn test_year_month_previous() {
    let march = YearMonth::new(2024, MonthName::March);
    assert_eq!(march.previous(), YearMonth::new(2024, MonthName::February));
}

#[test]
fn test_year_month_previous_rolls_over_year() {
    let january = YearMonth::new(2024, MonthName::January);
    assert_eq!(january.previous(), YearMonth::new(2023, MonthName::December));
}

#[test]
fn test_year_month_of_date() {
    let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
    assert_eq!(YearMonth::of(&date), YearMonth::new(2025, MonthName::November));
}

#[test]
fn test_year_month_display_and_order() {
    assert_eq!(YearMonth::new(2024, MonthName::February).to_string(), "2024-02");
    assert!(YearMonth::new(2023, MonthName::December) < YearMonth::new(2024, MonthName::January));
}

// ── YearEarnings ──────────────────────────────────────────────

#[test]
fn test_year_total() {
    let year = YearEarnings {
        year: 2024,
        months: vec![
            MonthEarnings {
                month: MonthName::January,
                earnings: dec!(10.00),
            },
            MonthEarnings {
                month: MonthName::June,
                earnings: dec!(2.50),
            },
        ],
    };
    assert_eq!(year.total(), dec!(12.50));
    assert_eq!(MonthEarnings::zero(MonthName::May).earnings, Decimal::ZERO);
}
