use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::checkout::SuppEvent;
use crate::source::RecordSource;
use crate::ui::util::format_cents;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &dyn RecordSource) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Supp.It", cmd_quit, r);
    register_command!("quit", "Quit Supp.It", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("c", "Go to Checkout", cmd_checkout, r);
    register_command!("checkout", "Go to Checkout", cmd_checkout, r);
    register_command!("y", "Show earnings for a year (e.g. :y 2024)", cmd_year, r);
    register_command!("year", "Show earnings for a year (e.g. :year 2024)", cmd_year, r);
    register_command!("tier", "Select a supp tier (e.g. :tier 2)", cmd_tier, r);
    register_command!("supps", "Set a custom supp count (e.g. :supps 7)", cmd_supps, r);
    register_command!("donate", "Prepare the checkout request", cmd_donate, r);
    register_command!("more", "Show all/fewer recent donations", cmd_more, r);
    register_command!("theme", "Toggle light/dark theme", cmd_theme, r);
    register_command!("r", "Reload records", cmd_reload, r);
    register_command!("reload", "Reload records", cmd_reload, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    source: &dyn RecordSource,
) -> anyhow::Result<()> {
    let input = input.trim();
    let (name, args) = match input.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (input, ""),
    };
    if name.is_empty() {
        return Ok(());
    }
    match COMMANDS.get(name) {
        Some(cmd) => (cmd.run)(args, app, source),
        None => {
            app.set_status(format!("Unknown command: {name}"));
            Ok(())
        }
    }
}

fn cmd_quit(_args: &str, app: &mut App, _source: &dyn RecordSource) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, _source: &dyn RecordSource) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_checkout(_args: &str, app: &mut App, _source: &dyn RecordSource) -> anyhow::Result<()> {
    app.screen = Screen::Checkout;
    Ok(())
}

fn cmd_year(args: &str, app: &mut App, _source: &dyn RecordSource) -> anyhow::Result<()> {
    if args.is_empty() {
        app.selected_year = app.today.year;
        app.set_status(format!("Showing {}", app.selected_year));
        return Ok(());
    }
    match args.parse::<i32>() {
        Ok(year) => {
            app.selected_year = year;
            app.screen = Screen::Dashboard;
            app.set_status(format!("Showing {year}"));
        }
        Err(_) => app.set_status(format!("Invalid year: {args}")),
    }
    Ok(())
}

fn cmd_tier(args: &str, app: &mut App, _source: &dyn RecordSource) -> anyhow::Result<()> {
    match args.parse::<u32>() {
        Ok(tier) if app.settings.tiers.contains(&tier) => {
            app.select_tier(tier);
            app.screen = Screen::Checkout;
        }
        _ => {
            let offered: Vec<String> = app.settings.tiers.iter().map(|t| t.to_string()).collect();
            app.set_status(format!("Tiers: {}", offered.join(", ")));
        }
    }
    Ok(())
}

fn cmd_supps(args: &str, app: &mut App, _source: &dyn RecordSource) -> anyhow::Result<()> {
    app.apply_supp(SuppEvent::EditCustom(args.to_string()));
    app.apply_supp(SuppEvent::CommitCustom);
    app.screen = Screen::Checkout;
    app.set_status(format!(
        "{}x Supps ({})",
        app.selection.custom_text,
        format_cents(app.selection.amount_cents)
    ));
    Ok(())
}

fn cmd_donate(_args: &str, app: &mut App, _source: &dyn RecordSource) -> anyhow::Result<()> {
    app.screen = Screen::Checkout;
    app.submit_checkout();
    Ok(())
}

fn cmd_more(_args: &str, app: &mut App, _source: &dyn RecordSource) -> anyhow::Result<()> {
    app.toggle_all_donations();
    Ok(())
}

fn cmd_theme(_args: &str, app: &mut App, _source: &dyn RecordSource) -> anyhow::Result<()> {
    app.toggle_theme();
    Ok(())
}

fn cmd_reload(_args: &str, app: &mut App, source: &dyn RecordSource) -> anyhow::Result<()> {
    match app.refresh(source) {
        Ok(()) => app.set_status(format!(
            "Reloaded {} transactions, {} donations",
            app.transactions.len(),
            app.donations.len()
        )),
        Err(e) => app.set_status(format!("Reload failed: {e:#}")),
    }
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _source: &dyn RecordSource) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
