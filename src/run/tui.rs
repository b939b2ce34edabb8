use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::checkout::FormField;
use crate::config::Settings;
use crate::source::RecordSource;
use crate::ui::app::{App, CheckoutControl, InputMode, Screen};
use crate::ui::commands;

pub(crate) fn as_tui(settings: Settings, source: &dyn RecordSource) -> Result<()> {
    let mut app = App::new(settings);
    if let Err(e) = app.refresh(source) {
        warn!("Initial load failed: {e:#}");
        app.set_status(format!("Load failed: {e:#}"));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, source);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    source: &dyn RecordSource,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, source)?,
                InputMode::Command => handle_command_input(key, app, source)?,
                InputMode::Editing(field) => handle_editing_input(key, app, field),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(
    key: event::KeyEvent,
    app: &mut App,
    source: &dyn RecordSource,
) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('1') => app.screen = Screen::Dashboard,
        KeyCode::Char('2') => app.screen = Screen::Checkout,
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            app.screen = screens[(idx + 1) % screens.len()];
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            app.screen = screens[prev];
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => match app.screen {
            Screen::Dashboard => handle_dashboard_key(key, app, source)?,
            Screen::Checkout => handle_checkout_key(key, app),
        },
    }
    Ok(())
}

fn handle_dashboard_key(
    key: event::KeyEvent,
    app: &mut App,
    source: &dyn RecordSource,
) -> Result<()> {
    match key.code {
        KeyCode::Char('H') | KeyCode::Char('h') | KeyCode::Left => app.shift_year(-1),
        KeyCode::Char('L') | KeyCode::Char('l') | KeyCode::Right => app.shift_year(1),
        KeyCode::Char('r') => commands::handle_command("reload", app, source)?,
        _ => {}
    }
    Ok(())
}

fn handle_checkout_key(key: event::KeyEvent, app: &mut App) {
    let count = app.checkout_controls().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.checkout_index + 1 < count {
                app.checkout_index += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.checkout_index = app.checkout_index.saturating_sub(1);
        }
        KeyCode::Char('g') => app.checkout_index = 0,
        KeyCode::Char('G') => app.checkout_index = count.saturating_sub(1),
        KeyCode::Char('m') => app.toggle_all_donations(),
        KeyCode::Enter => match app.focused_control() {
            Some(CheckoutControl::Tier(tier)) => app.select_tier(tier),
            Some(CheckoutControl::Field(field)) => app.start_editing(field),
            Some(CheckoutControl::Donate) => app.submit_checkout(),
            None => {}
        },
        _ => {}
    }
}

fn handle_command_input(
    key: event::KeyEvent,
    app: &mut App,
    source: &dyn RecordSource,
) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, source)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App, field: FormField) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.finish_editing(field),
        KeyCode::Tab => {
            app.finish_editing(field);
            app.start_editing(field.next());
        }
        KeyCode::Backspace => app.pop_char(field),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_char(field, c);
        }
        _ => {}
    }
}
