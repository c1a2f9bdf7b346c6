//! Price banner component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;

/// Gain threshold, in percent, above which the moon banner appears.
const MOON_THRESHOLD_PCT: f64 = 50.0;

/// Renders the price banner: current price, percent change against the
/// base price, and the moon call-out once the gain is large enough.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let price = app.series.current_price();
    let pct = app.series.percent_change();
    let positive = pct >= 0.0;

    let change_color = if positive { Color::Green } else { Color::Red };
    let arrow = if positive { "▲" } else { "▼" };

    let mut spans = vec![
        Span::styled(" HELICAT ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(arrow, Style::default().fg(change_color)),
        Span::styled(
            format!(" ${price:.2} "),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{pct:+.2}% "),
            Style::default().fg(change_color),
        ),
    ];

    if pct > MOON_THRESHOLD_PCT {
        spans.push(Span::styled(
            " 🚀 TO THE MOON! 🚀 ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
