//! Candle chart panel with the mascot overlay.
//!
//! Renders the series the way a plotter would scan it: one text row per
//! price level, one column per candle, `│` for wick cells and `█` for body
//! cells. The row mapping is the same one [`CandleSeries::chart_path`]
//! uses, so the mascot's sampled path position lands exactly on the candle
//! tops it follows.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::models::SurfaceLayout;
use crate::series::CandleSeries;

use super::app::App;

/// Width of the price-label gutter, including the axis bar.
const GUTTER_WIDTH: u16 = 12;

/// Renders the chart panel and records its inner area on the app so the
/// next tick updates the mascot in matching surface coordinates.
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let title = format!(" HeliCat [{}] ", app.series.config().trend.label());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.chart_area = Some(inner);

    if inner.width <= GUTTER_WIDTH + 2 || inner.height < 3 {
        let para = Paragraph::new("terminal too small").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, inner);
        return;
    }

    let layout = app.surface_layout();
    let rows = inner.height as usize;
    let cols = inner.width as usize;

    let (min_price, max_price) = app.series.price_bounds();
    let range = max_price - min_price;

    let mut grid = CellGrid::new(rows, cols);
    plot_candles(&mut grid, &app.series, &layout, min_price, range);
    plot_mascot(&mut grid, app);

    let lines: Vec<Line> = (0..rows)
        .map(|row| {
            let mut spans = vec![Span::styled(
                format!("{:>9.2} │ ", price_at_row(row, &layout, min_price, range)),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(grid.row_spans(row, GUTTER_WIDTH as usize));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Styled character buffer for one frame of the panel.
struct CellGrid {
    rows: usize,
    cols: usize,
    cells: Vec<(char, Style)>,
}

impl CellGrid {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![(' ', Style::default()); rows * cols],
        }
    }

    fn put(&mut self, row: usize, col: usize, ch: char, style: Style) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = (ch, style);
        }
    }

    fn row_spans(&self, row: usize, from_col: usize) -> Vec<Span<'static>> {
        self.cells[row * self.cols + from_col.min(self.cols)..(row + 1) * self.cols]
            .iter()
            .map(|(ch, style)| Span::styled(ch.to_string(), *style))
            .collect()
    }
}

/// Maps a price onto a row index using the same padded projection as the
/// chart path (flat series collapse onto the midline).
fn row_of(price: f64, layout: &SurfaceLayout, min_price: f64, range: f64) -> usize {
    let y = if range <= f64::EPSILON {
        layout.height / 2.0
    } else {
        layout.padding
            + (layout.height - 2.0 * layout.padding) * (1.0 - (price - min_price) / range)
    };
    (y.round().max(0.0) as usize).min((layout.height as usize).saturating_sub(1))
}

/// Inverse of [`row_of`] for the gutter labels.
fn price_at_row(row: usize, layout: &SurfaceLayout, min_price: f64, range: f64) -> f64 {
    if range <= f64::EPSILON {
        return min_price;
    }
    let inner = layout.height - 2.0 * layout.padding;
    min_price + range * (1.0 - (row as f64 - layout.padding) / inner)
}

fn plot_candles(
    grid: &mut CellGrid,
    series: &CandleSeries,
    layout: &SurfaceLayout,
    min_price: f64,
    range: f64,
) {
    let candles = series.candles();
    let n = candles.len();

    for (i, candle) in candles.iter().enumerate() {
        let x = layout.width - (n - i) as f64 * layout.stride;
        if x < f64::from(GUTTER_WIDTH) {
            continue;
        }
        let col = x as usize;

        let color = if candle.bullish {
            Color::Green
        } else {
            Color::Red
        };
        let mut style = Style::default().fg(color);
        if candle.is_fading() {
            style = style.add_modifier(Modifier::DIM);
        } else if i + 3 >= n {
            // The freshest candles get the "glow"
            style = style.add_modifier(Modifier::BOLD);
        }

        let top = row_of(candle.high, layout, min_price, range);
        let bottom = row_of(candle.low, layout, min_price, range);
        let body_top = row_of(candle.body_top(), layout, min_price, range);
        let body_bottom = row_of(candle.body_bottom(), layout, min_price, range);

        for row in top..=bottom {
            let ch = if row >= body_top && row <= body_bottom {
                '█'
            } else {
                '│'
            };
            grid.put(row, col, ch, style);
        }
    }
}

fn plot_mascot(grid: &mut CellGrid, app: &App) {
    let col = (app.mascot.x().round().max(0.0) as usize)
        .max(GUTTER_WIDTH as usize)
        .min(grid.cols.saturating_sub(1));
    let row = (app.mascot.y().round().max(0.0) as usize).min(grid.rows.saturating_sub(1));

    grid.put(
        row,
        col,
        app.mascot.glyph(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
}
