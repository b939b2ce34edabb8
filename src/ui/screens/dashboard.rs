use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::donation_lines;
use crate::earnings::selectable_years;
use crate::ui::app::App;
use crate::ui::theme::Palette;
use crate::ui::util::{format_brl, format_delta};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let p = app.theme.palette();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Summary cards
            Constraint::Length(1), // Year picker
            Constraint::Min(10),   // Earnings chart
            Constraint::Length(9), // Recent donations
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app, p);
    render_year_picker(f, chunks[1], app, p);
    render_earnings_chart(f, chunks[2], app, p);
    render_recent_donations(f, chunks[3], app, p);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let summary = &app.summary;
    let year_total = summary
        .series
        .iter()
        .find(|y| y.year == app.selected_year)
        .map(|y| y.total())
        .unwrap_or_default();

    render_card(
        f,
        cards[0],
        p,
        "Total Revenue",
        format_brl(summary.total_revenue),
        p.income_style(),
        delta_line(summary.revenue_percent_change),
    );
    render_card(
        f,
        cards[1],
        p,
        "Donations",
        summary.total_donations.to_string(),
        Style::default().fg(p.accent),
        delta_line(summary.donations_percent_change),
    );
    render_card(
        f,
        cards[2],
        p,
        "This Month",
        summary.this_month_donation_count.to_string(),
        Style::default().fg(p.yellow),
        format!("{} {}", app.today.month, app.today.year),
    );
    render_card(
        f,
        cards[3],
        p,
        &format!("{} Earnings", app.selected_year),
        format_brl(year_total),
        if year_total >= Decimal::ZERO {
            p.income_style()
        } else {
            p.expense_style()
        },
        String::new(),
    );
}

fn delta_line(delta: Decimal) -> String {
    format!("{} from last month", format_delta(delta))
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    p: &Palette,
    title: &str,
    value: String,
    value_style: Style,
    subtitle: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(format!(" {title} "), p.title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            value_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, p.dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_year_picker(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let mut spans = vec![Span::styled(" Year: ", p.dim_style())];
    let years = selectable_years(app.today.year);
    if !years.contains(&app.selected_year) {
        spans.push(Span::styled(
            format!(" {} ", app.selected_year),
            p.selected_style(),
        ));
        spans.push(Span::raw(" "));
    }
    for year in years {
        let style = if year == app.selected_year {
            p.selected_style()
        } else {
            p.dim_style()
        };
        spans.push(Span::styled(format!(" {year} "), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_earnings_chart(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let chart = app.chart();
    let title = Span::styled(format!(" Earnings {} ", app.selected_year), p.title_style());

    if app.transactions.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(p.border_style())
            .title(title);
        let msg = Paragraph::new(Line::from(Span::styled(
            format!(
                "No transactions loaded from {}",
                app.settings.transactions_path.display()
            ),
            p.dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    // Bars need whole values; the label carries the exact amount.
    let bars: Vec<Bar> = chart
        .iter()
        .map(|m| {
            let val = m.earnings.max(Decimal::ZERO).round().to_u64().unwrap_or(0);
            Bar::default()
                .value(val)
                .text_value(format!("{:.0}", m.earnings))
                .label(Line::from(m.month.short()))
                .style(Style::default().fg(p.accent))
                .value_style(Style::default().fg(p.header_bg).bg(p.accent))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / 12).saturating_sub(1).clamp(3, 10);

    let widget = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(p.border_style())
                .title(title),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(p.accent))
        .label_style(p.dim_style());

    f.render_widget(widget, area);
}

fn render_recent_donations(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(" Recent Donations ", p.title_style()));

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "You received {} donations this month.",
            app.summary.this_month_donation_count
        ),
        p.normal_style().add_modifier(Modifier::BOLD),
    ))];
    if app.donations.is_empty() {
        lines.push(Line::from(Span::styled("No donations yet", p.dim_style())));
    } else {
        lines.extend(donation_lines(app, p, area.width.saturating_sub(2) as usize));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
