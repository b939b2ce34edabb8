use anyhow::Result;
use log::info;

use crate::checkout::{
    checkout_request, tier_amount, CheckoutRequest, DonorForm, FormField, SuppEvent,
    SuppSelection,
};
use crate::config::Settings;
use crate::earnings::{chart_for_year, summarize, DashboardSummary};
use crate::models::{DonationRecord, MonthEarnings, TransactionRecord, YearMonth};
use crate::source::RecordSource;
use crate::ui::theme::Theme;
use crate::ui::util::format_cents;

/// Donations listed on the creator page before "show all".
pub(crate) const RECENT_DONATIONS_SHOWN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Checkout,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Checkout]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Checkout => write!(f, "Checkout"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing(FormField),
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing(_) => write!(f, "EDIT"),
        }
    }
}

/// One focusable row on the checkout screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CheckoutControl {
    Tier(u32),
    Field(FormField),
    Donate,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) theme: Theme,
    pub(crate) settings: Settings,
    pub(crate) today: YearMonth,

    // Dashboard
    pub(crate) transactions: Vec<TransactionRecord>,
    pub(crate) donations: Vec<DonationRecord>,
    pub(crate) summary: DashboardSummary,
    pub(crate) selected_year: i32,

    // Checkout
    pub(crate) selection: SuppSelection,
    pub(crate) form: DonorForm,
    pub(crate) checkout_index: usize,
    pub(crate) show_all_donations: bool,
    pub(crate) last_request: Option<CheckoutRequest>,
}

impl App {
    pub(crate) fn new(settings: Settings) -> Self {
        let today = settings.policy.zone.today();
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            theme: Theme::default(),
            settings,
            today,

            transactions: Vec::new(),
            donations: Vec::new(),
            summary: DashboardSummary::default(),
            selected_year: today.year,

            selection: SuppSelection::default(),
            form: DonorForm::default(),
            checkout_index: 0,
            show_all_donations: false,
            last_request: None,
        }
    }

    /// Fetch both record collections, then recompute everything from scratch.
    /// Nothing is replaced unless both fetches succeed.
    pub(crate) fn refresh(&mut self, source: &dyn RecordSource) -> Result<()> {
        let transactions = source.fetch_transactions()?;
        let donations = source.fetch_donations()?;
        self.transactions = transactions;
        self.donations = donations;
        self.today = self.settings.policy.zone.today();
        self.recompute();
        info!(
            "Loaded {} transactions and {} donations",
            self.transactions.len(),
            self.donations.len()
        );
        Ok(())
    }

    pub(crate) fn recompute(&mut self) {
        self.summary = summarize(
            &self.transactions,
            &self.donations,
            &self.settings.policy,
            self.today,
        );
    }

    /// Twelve bars for the selected year.
    pub(crate) fn chart(&self) -> Vec<MonthEarnings> {
        chart_for_year(&self.summary.series, self.selected_year)
    }

    pub(crate) fn shift_year(&mut self, delta: i32) {
        self.selected_year += delta;
        self.set_status(format!("Showing {}", self.selected_year));
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.set_status(format!("Theme: {}", self.theme));
    }

    // ── Checkout ──────────────────────────────────────────────

    pub(crate) fn checkout_controls(&self) -> Vec<CheckoutControl> {
        let mut controls: Vec<CheckoutControl> = self
            .settings
            .tiers
            .iter()
            .map(|t| CheckoutControl::Tier(*t))
            .collect();
        controls.extend(FormField::all().iter().map(|f| CheckoutControl::Field(*f)));
        controls.push(CheckoutControl::Donate);
        controls
    }

    pub(crate) fn focused_control(&self) -> Option<CheckoutControl> {
        self.checkout_controls().get(self.checkout_index).copied()
    }

    pub(crate) fn apply_supp(&mut self, event: SuppEvent) {
        let selection = std::mem::take(&mut self.selection);
        self.selection = selection.reduce(event);
    }

    pub(crate) fn select_tier(&mut self, tier: u32) {
        self.apply_supp(SuppEvent::SelectTier(tier));
        self.set_status(format!(
            "{tier}x Supps selected ({})",
            format_cents(tier_amount(tier))
        ));
    }

    /// Text currently shown in a checkout field.
    pub(crate) fn field_text(&self, field: FormField) -> &str {
        match field {
            FormField::Custom => &self.selection.custom_text,
            _ => self.form.field(field).unwrap_or(""),
        }
    }

    pub(crate) fn start_editing(&mut self, field: FormField) {
        self.input_mode = InputMode::Editing(field);
        if let Some(idx) = self
            .checkout_controls()
            .iter()
            .position(|c| *c == CheckoutControl::Field(field))
        {
            self.checkout_index = idx;
        }
    }

    pub(crate) fn push_char(&mut self, field: FormField, c: char) {
        match field {
            FormField::Custom => {
                let mut text = self.selection.custom_text.clone();
                text.push(c);
                self.apply_supp(SuppEvent::EditCustom(text));
            }
            _ => {
                if let Some(value) = self.form.field_mut(field) {
                    value.push(c);
                }
            }
        }
    }

    pub(crate) fn pop_char(&mut self, field: FormField) {
        match field {
            FormField::Custom => {
                let mut text = self.selection.custom_text.clone();
                text.pop();
                self.apply_supp(SuppEvent::EditCustom(text));
            }
            _ => {
                if let Some(value) = self.form.field_mut(field) {
                    value.pop();
                }
            }
        }
    }

    /// Leave a field. The custom quantity is committed on the way out.
    pub(crate) fn finish_editing(&mut self, field: FormField) {
        if field == FormField::Custom {
            self.apply_supp(SuppEvent::CommitCustom);
        }
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn visible_donations(&self) -> &[DonationRecord] {
        if self.show_all_donations {
            &self.donations
        } else {
            &self.donations[..self.donations.len().min(RECENT_DONATIONS_SHOWN)]
        }
    }

    pub(crate) fn has_more_donations(&self) -> bool {
        self.donations.len() > RECENT_DONATIONS_SHOWN
    }

    pub(crate) fn toggle_all_donations(&mut self) {
        if self.has_more_donations() {
            self.show_all_donations = !self.show_all_donations;
        }
    }

    pub(crate) fn submit_checkout(&mut self) {
        match checkout_request(&self.settings.creator_user, &self.selection, &self.form) {
            Some(request) => {
                info!(
                    "Checkout for {} cents to creator '{}'",
                    request.amount, request.creator_user
                );
                self.set_status(format!(
                    "Checkout ready: {} to {}",
                    format_cents(request.amount),
                    request.creator_user
                ));
                self.last_request = Some(request);
            }
            None if self.settings.creator_user.trim().is_empty() => {
                self.set_status("No creator set (use --creator <user>)");
            }
            None => self.set_status("Name and email are required"),
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
