use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::donation_lines;
use crate::ui::app::{App, CheckoutControl, InputMode};
use crate::ui::theme::Palette;
use crate::ui::util::{tier_label, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let p = app.theme.palette();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_creator_page(f, columns[0], app, p);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(7)])
        .split(columns[1]);

    render_supp_form(f, right[0], app, p);
    render_last_request(f, right[1], app, p);
}

fn creator_name(app: &App) -> &str {
    let creator = app.settings.creator_user.trim();
    if creator.is_empty() {
        "(no creator)"
    } else {
        creator
    }
}

fn render_creator_page(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(format!(" {} ", creator_name(app)), p.title_style()));

    let mut lines = vec![
        Line::from(Span::styled(
            "Recent supporters",
            p.normal_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if app.donations.is_empty() {
        lines.push(Line::from(Span::styled(
            "Be the first to buy a supp!",
            p.dim_style(),
        )));
    } else {
        lines.extend(donation_lines(app, p, area.width.saturating_sub(2) as usize));
    }

    let page = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(page, area);
}

fn render_supp_form(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(
            format!(" Support {} ", creator_name(app)),
            p.title_style(),
        ));

    let focused = app.focused_control();
    let field_width = area.width.saturating_sub(20) as usize;
    let mut lines = Vec::new();

    for control in app.checkout_controls() {
        let is_focused = focused == Some(control);
        let marker = if is_focused { "> " } else { "  " };
        let line = match control {
            CheckoutControl::Tier(tier) => {
                let style = if app.selection.is_tier_selected(tier) {
                    p.selected_style().add_modifier(Modifier::BOLD)
                } else {
                    p.normal_style()
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(p.accent)),
                    Span::styled(format!(" {} ", tier_label(tier)), style),
                ])
            }
            CheckoutControl::Field(field) => {
                let editing = app.input_mode == InputMode::Editing(field);
                let text = app.field_text(field);
                let value_style = if editing {
                    Style::default().fg(p.yellow)
                } else if text.is_empty() {
                    p.dim_style()
                } else {
                    p.normal_style()
                };
                let shown = if text.is_empty() && !editing {
                    "-".to_string()
                } else {
                    truncate(text, field_width)
                };
                if lines.len() == app.settings.tiers.len() {
                    lines.push(Line::from(""));
                }
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(p.accent)),
                    Span::styled(format!("{:<14}", field.label()), p.dim_style()),
                    Span::styled(shown, value_style),
                ])
            }
            CheckoutControl::Donate => {
                lines.push(Line::from(""));
                let style = if is_focused {
                    p.selected_style().add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(p.green).add_modifier(Modifier::BOLD)
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(p.accent)),
                    Span::styled(
                        format!(" Donate R$ {:.2} ", app.selection.amount_major()),
                        style,
                    ),
                ])
            }
        };
        lines.push(line);
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_last_request(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(" Checkout Request ", p.title_style()));

    let lines = match &app.last_request {
        Some(request) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Amount:  ", p.dim_style()),
                    Span::styled(format!("{} cents", request.amount), p.income_style()),
                ]),
                Line::from(vec![
                    Span::styled("Creator: ", p.dim_style()),
                    Span::styled(request.creator_user.as_str(), p.normal_style()),
                ]),
                Line::from(vec![
                    Span::styled("Donor:   ", p.dim_style()),
                    Span::styled(
                        format!("{} <{}>", request.donor_name, request.donor_email),
                        p.normal_style(),
                    ),
                ]),
            ];
            if !request.donor_comment.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Comment: ", p.dim_style()),
                    Span::styled(request.donor_comment.as_str(), p.normal_style()),
                ]));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "Fill in your name and email, then press Enter on Donate",
            p.dim_style(),
        ))],
    };

    let panel = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}
