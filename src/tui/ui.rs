//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::App;
use super::{chart, components};

/// Renders the entire application UI.
///
/// Takes `&mut App` because the chart panel records its inner area so the
/// next tick can update the mascot in matching surface coordinates.
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Price banner
            Constraint::Min(5),    // Chart + mascot
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    components::header::render(frame, layout[0], app);
    chart::render(frame, layout[1], app);
    components::status_bar::render(frame, layout[2], app);
}
