#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn typed(text: &str) -> SuppSelection {
    SuppSelection::default().reduce(SuppEvent::EditCustom(text.into()))
}

fn committed(text: &str) -> SuppSelection {
    typed(text).reduce(SuppEvent::CommitCustom)
}

// ── Tiers ─────────────────────────────────────────────────────

#[test]
fn test_tier_amounts() {
    for tier in 1..=5 {
        assert_eq!(tier_amount(tier), i64::from(tier) * 500);
    }
}

#[test]
fn test_tier_zero_resolves_to_minimum() {
    assert_eq!(tier_amount(0), SUPP_UNIT_CENTS);
}

#[test]
fn test_select_tier_clears_custom_text() {
    let selection = typed("7").reduce(SuppEvent::SelectTier(2));
    assert_eq!(selection.amount_cents, 1000);
    assert!(selection.custom_text.is_empty());
    assert!(selection.is_tier_selected(2));
    assert!(!selection.is_tier_selected(1));
}

#[test]
fn test_default_selection_is_one_supp() {
    let selection = SuppSelection::default();
    assert_eq!(selection.amount_cents, 500);
    assert!(selection.is_tier_selected(1));
    assert_eq!(selection.amount_major(), dec!(5.00));
}

// ── parse_quantity ────────────────────────────────────────────

#[test]
fn test_parse_quantity() {
    assert_eq!(parse_quantity("3"), Some(dec!(3)));
    assert_eq!(parse_quantity(" 2.5 "), Some(dec!(2.5)));
    assert_eq!(parse_quantity("1e2"), Some(dec!(100)));
    assert_eq!(parse_quantity(""), None);
    assert_eq!(parse_quantity("   "), None);
    assert_eq!(parse_quantity("abc"), None);
    assert_eq!(parse_quantity("1_000"), None);
}

// ── Live preview ──────────────────────────────────────────────

#[test]
fn test_preview_valid_quantity() {
    let selection = typed("4");
    assert_eq!(selection.amount_cents, 2000);
    assert_eq!(selection.custom_text, "4");
}

#[test]
fn test_preview_invalid_keeps_text_and_floors_amount() {
    for text in ["", "0", "0.5", "-3", "abc", "4x"] {
        let selection = typed(text);
        assert_eq!(selection.amount_cents, 500, "input {text:?}");
        assert_eq!(selection.custom_text, text);
    }
}

#[test]
fn test_preview_fractional_quantity() {
    assert_eq!(preview_amount("1.5"), 750);
    assert_eq!(preview_amount("1.001"), 501);
}

#[test]
fn test_amount_rounds_half_away_from_zero() {
    // 1.003 * 500 = 501.5
    assert_eq!(amount_for_quantity(dec!(1.003)), Some(502));
}

#[test]
fn test_amount_overflow_is_rejected() {
    assert_eq!(amount_for_quantity(dec!(79228162514264337593543950)), None);
    assert_eq!(preview_amount("79228162514264337593543950"), 500);
}

// ── Commit ────────────────────────────────────────────────────

#[test]
fn test_commit_empty_coerces_to_one() {
    let selection = committed("");
    assert_eq!(selection.amount_cents, 500);
    assert_eq!(selection.custom_text, "1");
}

#[test]
fn test_commit_zero_coerces_to_one() {
    let selection = committed("0");
    assert_eq!(selection.amount_cents, 500);
    assert_eq!(selection.custom_text, "1");
}

#[test]
fn test_commit_non_numeric_coerces_to_one() {
    let selection = committed("lots");
    assert_eq!(selection.amount_cents, 500);
    assert_eq!(selection.custom_text, "1");
}

#[test]
fn test_commit_keeps_valid_quantity() {
    for q in 1..=20i64 {
        let selection = committed(&q.to_string());
        assert_eq!(selection.amount_cents, q * 500);
        assert_eq!(selection.custom_text, q.to_string());
    }
}

#[test]
fn test_commit_normalizes_display_text() {
    assert_eq!(committed("2.50").custom_text, "2.5");
    assert_eq!(committed("007").custom_text, "7");
    assert_eq!(committed("2.50").amount_cents, 1250);
}

#[test]
fn test_resolve_committed_direct() {
    assert_eq!(resolve_committed("3"), (dec!(3), 1500));
    assert_eq!(resolve_committed("-1"), (Decimal::ONE, 500));
}

// ── Checkout request ──────────────────────────────────────────

fn filled_form() -> DonorForm {
    DonorForm {
        donor_name: "Ana".into(),
        donor_email: "ana@example.com".into(),
        donor_comment: "Great content!".into(),
    }
}

#[test]
fn test_checkout_request_built() {
    let selection = SuppSelection::default().reduce(SuppEvent::SelectTier(3));
    let request = checkout_request("maria", &selection, &filled_form()).unwrap();
    assert_eq!(request.amount, 1500);
    assert_eq!(request.creator_user, "maria");
    assert_eq!(request.donor_name, "Ana");
    assert_eq!(request.donor_comment, "Great content!");
}

#[test]
fn test_checkout_request_comment_optional() {
    let form = DonorForm {
        donor_comment: String::new(),
        ..filled_form()
    };
    assert!(checkout_request("maria", &SuppSelection::default(), &form).is_some());
}

#[test]
fn test_checkout_request_requires_name_email_creator() {
    let selection = SuppSelection::default();
    let no_name = DonorForm {
        donor_name: "  ".into(),
        ..filled_form()
    };
    let no_email = DonorForm {
        donor_email: String::new(),
        ..filled_form()
    };
    assert!(checkout_request("maria", &selection, &no_name).is_none());
    assert!(checkout_request("maria", &selection, &no_email).is_none());
    assert!(checkout_request("", &selection, &filled_form()).is_none());
}

#[test]
fn test_form_field_cycle() {
    assert_eq!(FormField::Custom.next(), FormField::Name);
    assert_eq!(FormField::Comment.next(), FormField::Custom);
    let mut form = DonorForm::default();
    form.field_mut(FormField::Email).unwrap().push_str("x@y.z");
    assert_eq!(form.field(FormField::Email), Some("x@y.z"));
    assert!(form.field_mut(FormField::Custom).is_none());
}
