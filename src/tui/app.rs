//! Application state for the TUI.

use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::ChartConfig;
use crate::mascot::Mascot;
use crate::models::SurfaceLayout;
use crate::series::{CandleSeries, SeriesConfig, StdSource};

/// Horizontal distance between adjacent candles: one body column plus one
/// spacing column.
pub const CANDLE_STRIDE: f64 = 2.0;

/// Rows kept clear above and below the plotted price range.
pub const CHART_PADDING: f64 = 1.0;

/// Columns the mascot covers per tick.
const MASCOT_SPEED: f64 = 0.6;

/// Central application state container.
///
/// The `App` is the composition root's single owner of the candle series;
/// the renderer reads it by reference and the mascot receives the projected
/// path explicitly on every tick.
pub struct App {
    /// The rolling candle series.
    pub series: CandleSeries,
    /// Mascot riding the chart path.
    pub mascot: Mascot,
    /// Phase fraction fed to the series on each tick.
    pub speed: f64,
    /// Tick duration in seconds, drives the mascot's bob clock.
    pub tick_secs: f64,
    /// Whether the animation is paused.
    pub paused: bool,
    /// Ticks processed since startup (including paused ones).
    pub ticks: u64,
    /// When the session started.
    pub session_start: Instant,
    /// Inner area of the chart panel from the most recent draw; the mascot
    /// is updated in the same surface coordinates the path was projected
    /// onto.
    pub chart_area: Option<Rect>,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates the application state from the loaded configuration.
    pub fn new(config: &ChartConfig) -> Self {
        let series_config = SeriesConfig {
            base_price: config.base_price,
            volatility: config.volatility,
            max_candles: config.max_candles,
            trend: config.trend,
        };
        let source = match config.seed {
            Some(seed) => StdSource::seeded(seed),
            None => StdSource::from_entropy(),
        };

        Self {
            series: CandleSeries::with_source(series_config, Box::new(source)),
            mascot: Mascot::new(MASCOT_SPEED),
            speed: config.speed,
            tick_secs: config.tick_ms as f64 / 1000.0,
            paused: false,
            ticks: 0,
            session_start: Instant::now(),
            chart_area: None,
            should_quit: false,
        }
    }

    /// Advances the animation by one tick: the series first, then the
    /// mascot against the freshly projected path.
    pub fn on_tick(&mut self) {
        self.ticks += 1;
        if self.paused {
            return;
        }

        self.series.advance(self.speed);

        let layout = self.surface_layout();
        let path = self.series.chart_path(&layout);
        self.mascot
            .update(&path, layout.width, layout.height, self.tick_secs);
    }

    /// Toggles the pause state.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        tracing::debug!(paused = self.paused, "pause toggled");
    }

    /// Restarts the walk from the base price.
    pub fn reseed(&mut self) {
        self.series.reseed();
    }

    /// Surface geometry matching the chart panel's inner area. Falls back
    /// to a conventional 80x24 surface before the first draw.
    #[must_use]
    pub fn surface_layout(&self) -> SurfaceLayout {
        let (width, height) = match self.chart_area {
            Some(area) => (f64::from(area.width), f64::from(area.height)),
            None => (80.0, 24.0),
        };
        SurfaceLayout {
            width,
            height,
            stride: CANDLE_STRIDE,
            padding: CHART_PADDING,
        }
    }

    /// Elapsed session duration in seconds.
    #[must_use]
    pub fn session_secs(&self) -> u64 {
        self.session_start.elapsed().as_secs()
    }
}
