use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::checkout::{
    checkout_request, resolve_committed, DonorForm, SuppEvent, SuppSelection,
};
use crate::config::Settings;
use crate::earnings::{chart_for_year, summarize};
use crate::models::MonthName;
use crate::source::RecordSource;
use crate::ui::util::{format_brl, format_cents, format_delta, tier_label};

pub(crate) fn as_cli(args: &[String], settings: &Settings, source: &dyn RecordSource) -> Result<()> {
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };
    match command.as_str() {
        "summary" | "s" => cli_summary(settings, source),
        "earnings" | "e" => cli_earnings(&args[1..], settings, source),
        "quote" | "q" => cli_quote(&args[1..], settings),
        "donations" | "d" => cli_donations(&args[1..], source),
        "checkout" => cli_checkout(&args[1..], settings),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("suppit {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Supp.It: creator earnings and supp checkout");
    println!();
    println!("Usage: suppit [options] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print dashboard totals and month-over-month change");
    println!("  earnings [YEAR] [MONTH]       Print monthly or single-month earnings (default: current year)");
    println!("  quote [SUPPS]                 Price a number of supps");
    println!("  donations [--all]             List recent donations");
    println!("  checkout --name <n> --email <e> [--comment <c>] [--supps <n> | --tier <n>]");
    println!("                                Build a checkout request");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --transactions <path>         Transactions CSV export");
    println!("  --donations <path>            Donations CSV export");
    println!("  --creator <user>              Creator receiving donations");
    println!("  --tiers <n,n,...>             Supp tiers offered at checkout");
    println!("  --charges-only                Count only 'charge' transactions");
    println!("  --all-categories              Count every transaction");
    println!("  --utc, --local                Month bucketing time zone");
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn cli_summary(settings: &Settings, source: &dyn RecordSource) -> Result<()> {
    let transactions = source.fetch_transactions()?;
    let donations = source.fetch_donations()?;
    let today = settings.policy.zone.today();
    let summary = summarize(&transactions, &donations, &settings.policy, today);

    println!("Supp.It: {today}");
    println!("{}", "─".repeat(48));
    println!(
        "  Total Revenue: {:<14} {} from last month",
        format_brl(summary.total_revenue),
        format_delta(summary.revenue_percent_change)
    );
    println!(
        "  Donations:     {:<14} {} from last month",
        summary.total_donations,
        format_delta(summary.donations_percent_change)
    );
    println!(
        "  You received {} donations this month.",
        summary.this_month_donation_count
    );
    Ok(())
}

fn cli_earnings(args: &[String], settings: &Settings, source: &dyn RecordSource) -> Result<()> {
    let today = settings.policy.zone.today();
    let (year, month) = earnings_args(args, today.year)?;

    let transactions = source.fetch_transactions()?;
    let summary = summarize(&transactions, &[], &settings.policy, today);
    let chart = chart_for_year(&summary.series, year);

    if let Some(month) = month {
        let earnings = chart
            .iter()
            .find(|m| m.month == month)
            .map(|m| m.earnings)
            .unwrap_or_default();
        println!("{month} {year}: {}", format_brl(earnings));
        return Ok(());
    }

    println!("Earnings {year}");
    println!("{}", "─".repeat(24));
    for month in &chart {
        println!("  {}  {:>16}", month.month.short(), format_brl(month.earnings));
    }
    let total: Decimal = chart.iter().map(|m| m.earnings).sum();
    println!("{}", "─".repeat(24));
    println!("  Tot  {:>16}", format_brl(total));
    Ok(())
}

/// `[YEAR] [MONTH]` in either order; the year defaults to `current_year`.
fn earnings_args(args: &[String], current_year: i32) -> Result<(i32, Option<MonthName>)> {
    let mut year = None;
    let mut month = None;
    for arg in args.iter().filter(|a| !a.starts_with('-')) {
        if let Some(m) = MonthName::parse(arg) {
            if month.replace(m).is_some() {
                anyhow::bail!("Only one month may be given");
            }
        } else {
            let y = arg
                .parse::<i32>()
                .with_context(|| format!("Invalid year or month: {arg}"))?;
            if year.replace(y).is_some() {
                anyhow::bail!("Only one year may be given");
            }
        }
    }
    Ok((year.unwrap_or(current_year), month))
}

fn cli_quote(args: &[String], settings: &Settings) -> Result<()> {
    let text = args.first().map(String::as_str).unwrap_or("");
    let (quantity, amount) = resolve_committed(text);
    println!("{quantity}x Supps = {}", format_cents(amount));

    if args.is_empty() {
        println!();
        println!("Tiers:");
        for tier in &settings.tiers {
            println!("  {}", tier_label(*tier));
        }
    }
    Ok(())
}

fn cli_donations(args: &[String], source: &dyn RecordSource) -> Result<()> {
    let donations = source.fetch_donations()?;
    if donations.is_empty() {
        println!("No donations");
        return Ok(());
    }

    let show_all = args.iter().any(|a| a == "--all");
    let shown = if show_all {
        donations.len()
    } else {
        donations.len().min(crate::ui::app::RECENT_DONATIONS_SHOWN)
    };
    for donation in &donations[..shown] {
        println!(
            "{} donated {}",
            donation.donor_name,
            format_cents(donation.amount)
        );
        if !donation.comment.is_empty() {
            println!("  \"{}\"", donation.comment);
        }
    }
    if shown < donations.len() {
        println!("... {} more (use --all)", donations.len() - shown);
    }
    Ok(())
}

fn cli_checkout(args: &[String], settings: &Settings) -> Result<()> {
    let mut selection = SuppSelection::default();
    if let Some(tier) = flag_value(args, "--tier") {
        let tier: u32 = tier
            .parse()
            .with_context(|| format!("Invalid tier: {tier}"))?;
        if !settings.tiers.contains(&tier) {
            anyhow::bail!("Tier {tier} is not offered");
        }
        selection = selection.reduce(SuppEvent::SelectTier(tier));
    }
    if let Some(supps) = flag_value(args, "--supps") {
        selection = selection
            .reduce(SuppEvent::EditCustom(supps.to_string()))
            .reduce(SuppEvent::CommitCustom);
    }

    let form = DonorForm {
        donor_name: flag_value(args, "--name").unwrap_or_default().to_string(),
        donor_email: flag_value(args, "--email").unwrap_or_default().to_string(),
        donor_comment: flag_value(args, "--comment").unwrap_or_default().to_string(),
    };

    let Some(request) = checkout_request(&settings.creator_user, &selection, &form) else {
        anyhow::bail!("A checkout needs --creator <user>, --name <name> and --email <email>");
    };

    println!("Checkout request");
    println!("{}", "─".repeat(40));
    println!("  Amount:   {} cents ({})", request.amount, format_cents(request.amount));
    println!("  Creator:  {}", request.creator_user);
    println!("  Donor:    {} <{}>", request.donor_name, request.donor_email);
    if !request.donor_comment.is_empty() {
        println!("  Comment:  {}", request.donor_comment);
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
