//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();

    if app.paused {
        spans.push(Span::styled(
            " PAUSED ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::raw("│"));
    }

    spans.extend([
        Span::styled(
            format!(" {} candles ", app.series.len()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" tick {} ", app.ticks),
            Style::default().fg(Color::White),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" {}s ", app.session_secs()),
            Style::default().fg(Color::White),
        ),
    ]);

    let hints = "[space]pause [r]eseed [q]uit";
    spans.push(Span::styled(
        format!(
            "{:>width$}",
            hints,
            width = (area.width as usize).saturating_sub(40)
        ),
        Style::default().fg(Color::DarkGray),
    ));

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
