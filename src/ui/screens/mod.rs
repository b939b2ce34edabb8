pub(crate) mod checkout;
pub(crate) mod dashboard;

use ratatui::text::{Line, Span};

use crate::ui::app::App;
use crate::ui::theme::Palette;
use crate::ui::util::truncate;

/// "<donor> donated R$ x.xx" lines, each followed by the comment when present.
pub(crate) fn donation_lines<'a>(app: &'a App, p: &Palette, width: usize) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for donation in app.visible_donations() {
        let donor = if donation.donor_name.is_empty() {
            "Someone"
        } else {
            donation.donor_name.as_str()
        };
        lines.push(Line::from(vec![
            Span::styled(truncate(donor, width.saturating_sub(20).max(8)), p.normal_style()),
            Span::styled(" donated ", p.dim_style()),
            Span::styled(format!("R$ {:.2}", donation.amount_major()), p.income_style()),
        ]));
        if !donation.comment.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  \"{}\"", truncate(&donation.comment, width.saturating_sub(4))),
                p.dim_style(),
            )));
        }
    }
    if app.has_more_donations() {
        let hint = if app.show_all_donations {
            " m: show fewer"
        } else {
            " m: show all"
        };
        lines.push(Line::from(Span::styled(hint, p.dim_style())));
    }
    lines
}
