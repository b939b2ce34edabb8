#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::PathBuf;

use super::*;
use crate::earnings::{AggregationPolicy, BucketZone};
use crate::models::MonthName;

struct FixedSource {
    transactions: Vec<TransactionRecord>,
    donations: Vec<DonationRecord>,
}

impl RecordSource for FixedSource {
    fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>> {
        Ok(self.transactions.clone())
    }

    fn fetch_donations(&self) -> Result<Vec<DonationRecord>> {
        Ok(self.donations.clone())
    }
}

struct FailingSource;

impl RecordSource for FailingSource {
    fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>> {
        anyhow::bail!("backend unavailable")
    }

    fn fetch_donations(&self) -> Result<Vec<DonationRecord>> {
        Ok(Vec::new())
    }
}

struct DonationsDownSource;

impl RecordSource for DonationsDownSource {
    fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>> {
        Ok(vec![TransactionRecord::new(ts(2023, 5), 9900, "charge"); 3])
    }

    fn fetch_donations(&self) -> Result<Vec<DonationRecord>> {
        anyhow::bail!("donation log unavailable")
    }
}

fn settings(creator: &str) -> Settings {
    Settings {
        transactions_path: PathBuf::from("t.csv"),
        donations_path: PathBuf::from("d.csv"),
        policy: AggregationPolicy {
            charges_only: false,
            zone: BucketZone::Utc,
        },
        creator_user: creator.into(),
        tiers: vec![1, 2, 3],
    }
}

fn ts(year: i32, month: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp()
}

fn donations(n: usize) -> Vec<DonationRecord> {
    (0..n)
        .map(|i| DonationRecord {
            id: i.to_string(),
            created_at: "2024-06-01T00:00:00Z".into(),
            amount: 500,
            donor_name: format!("Donor {i}"),
            ..DonationRecord::default()
        })
        .collect()
}

fn type_into(app: &mut App, field: FormField, text: &str) {
    app.start_editing(field);
    for c in text.chars() {
        app.push_char(field, c);
    }
    app.finish_editing(field);
}

// ── Dashboard ─────────────────────────────────────────────────

#[test]
fn test_refresh_computes_summary() {
    let source = FixedSource {
        transactions: vec![
            TransactionRecord::new(ts(2023, 3), 1000, "charge"),
            TransactionRecord::new(ts(2023, 4), 2000, "charge"),
        ],
        donations: donations(2),
    };
    let mut app = App::new(settings("maria"));
    app.refresh(&source).unwrap();
    assert_eq!(app.summary.total_revenue, dec!(30.00));
    assert_eq!(app.summary.total_donations, 2);
    assert_eq!(app.summary.series.len(), 1);
    assert_eq!(app.donations.len(), 2);
}

#[test]
fn test_refresh_failure_leaves_state_untouched() {
    let mut app = App::new(settings("maria"));
    assert!(app.refresh(&FailingSource).is_err());
    assert_eq!(app.summary, DashboardSummary::default());
}

#[test]
fn test_refresh_keeps_previous_load_when_donations_fail() {
    let good = FixedSource {
        transactions: vec![TransactionRecord::new(ts(2023, 3), 1000, "charge")],
        donations: donations(2),
    };
    let mut app = App::new(settings("maria"));
    app.refresh(&good).unwrap();
    let before = app.summary.clone();

    assert!(app.refresh(&DonationsDownSource).is_err());
    assert_eq!(app.transactions.len(), 1);
    assert_eq!(app.donations.len(), 2);
    assert_eq!(app.summary, before);
    assert_eq!(app.summary.total_revenue, dec!(10.00));
}

#[test]
fn test_year_navigation_only_remerges() {
    let source = FixedSource {
        transactions: vec![TransactionRecord::new(ts(2023, 3), 1000, "charge")],
        donations: Vec::new(),
    };
    let mut app = App::new(settings("maria"));
    app.refresh(&source).unwrap();
    app.selected_year = 2024;
    assert!(app.chart().iter().all(|m| m.earnings == Decimal::ZERO));
    app.shift_year(-1);
    assert_eq!(app.selected_year, 2023);
    let chart = app.chart();
    assert_eq!(chart.len(), 12);
    assert_eq!(chart[2].month, MonthName::March);
    assert_eq!(chart[2].earnings, dec!(10.00));
}

#[test]
fn test_toggle_theme() {
    let mut app = App::new(settings(""));
    assert_eq!(app.theme, Theme::Light);
    app.toggle_theme();
    assert_eq!(app.theme, Theme::Dark);
}

// ── Checkout ──────────────────────────────────────────────────

#[test]
fn test_checkout_controls_layout() {
    let app = App::new(settings("maria"));
    let controls = app.checkout_controls();
    assert_eq!(controls.len(), 3 + 4 + 1);
    assert_eq!(controls[0], CheckoutControl::Tier(1));
    assert_eq!(controls[3], CheckoutControl::Field(FormField::Custom));
    assert_eq!(controls[7], CheckoutControl::Donate);
}

#[test]
fn test_custom_typing_previews_and_commits() {
    let mut app = App::new(settings("maria"));
    app.start_editing(FormField::Custom);
    app.push_char(FormField::Custom, '4');
    assert_eq!(app.selection.amount_cents, 2000);
    app.pop_char(FormField::Custom);
    assert_eq!(app.selection.amount_cents, 500);
    assert_eq!(app.selection.custom_text, "");
    app.finish_editing(FormField::Custom);
    assert_eq!(app.selection.custom_text, "1");
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_tier_after_custom_clears_text() {
    let mut app = App::new(settings("maria"));
    type_into(&mut app, FormField::Custom, "6");
    assert_eq!(app.selection.amount_cents, 3000);
    app.select_tier(2);
    assert_eq!(app.selection.amount_cents, 1000);
    assert!(app.selection.custom_text.is_empty());
}

#[test]
fn test_submit_checkout() {
    let mut app = App::new(settings("maria"));
    app.select_tier(3);
    type_into(&mut app, FormField::Name, "Ana");
    type_into(&mut app, FormField::Email, "ana@example.com");
    app.submit_checkout();
    let request = app.last_request.clone().unwrap();
    assert_eq!(request.amount, 1500);
    assert_eq!(request.creator_user, "maria");
    assert_eq!(app.field_text(FormField::Name), "Ana");
}

#[test]
fn test_submit_checkout_incomplete() {
    let mut app = App::new(settings("maria"));
    type_into(&mut app, FormField::Name, "Ana");
    app.submit_checkout();
    assert!(app.last_request.is_none());
    assert_eq!(app.status_message, "Name and email are required");

    let mut app = App::new(settings(""));
    type_into(&mut app, FormField::Name, "Ana");
    type_into(&mut app, FormField::Email, "ana@example.com");
    app.submit_checkout();
    assert!(app.last_request.is_none());
}

#[test]
fn test_recent_donations_show_more() {
    let source = FixedSource {
        transactions: Vec::new(),
        donations: donations(8),
    };
    let mut app = App::new(settings("maria"));
    app.refresh(&source).unwrap();
    assert!(app.has_more_donations());
    assert_eq!(app.visible_donations().len(), 5);
    app.toggle_all_donations();
    assert_eq!(app.visible_donations().len(), 8);
    app.toggle_all_donations();
    assert_eq!(app.visible_donations().len(), 5);
}

#[test]
fn test_few_donations_have_no_toggle() {
    let source = FixedSource {
        transactions: Vec::new(),
        donations: donations(3),
    };
    let mut app = App::new(settings("maria"));
    app.refresh(&source).unwrap();
    assert!(!app.has_more_donations());
    app.toggle_all_donations();
    assert!(!app.show_all_donations);
    assert_eq!(app.visible_donations().len(), 3);
}
