//! The synthetic candle series: a rolling OHLC sequence with a rigged walk.
//!
//! [`CandleSeries`] owns the candle deque and the price-generation rule.
//! A per-frame driver calls [`CandleSeries::advance`] with the fraction of
//! a candle interval that elapsed; when the accumulated phase rolls over,
//! the oldest candle starts fading out and a fresh candle is appended,
//! seeded from the previous close. The series is constructed once by the
//! composition root and handed by reference to the renderer and to path
//! consumers — there is no global instance.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Candle, ChartPathPoint, SurfaceLayout};

/// Fade decrement applied to the retiring candle on each phase rollover.
const FADE_STEP: f64 = 0.1;

/// Direction the rigged walk is allowed to move.
///
/// The walk is deliberately biased: every candle moves the same way. This
/// is a visual gag, not a market model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Trend {
    /// Every candle closes above its open.
    #[default]
    Rising,
    /// Every candle closes below its open.
    Falling,
}

impl Trend {
    /// Sign applied to the per-candle price delta.
    #[must_use]
    pub fn signum(self) -> f64 {
        match self {
            Trend::Rising => 1.0,
            Trend::Falling => -1.0,
        }
    }

    /// Returns a display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
        }
    }
}

/// Tunables for the candle generator.
#[derive(Debug, Clone, Copy)]
pub struct SeriesConfig {
    /// Open price of the very first candle.
    pub base_price: f64,
    /// Per-candle move as a fraction of the previous close.
    pub volatility: f64,
    /// Steady-state series length. The series may hold one extra candle
    /// while the oldest one fades out, never more.
    pub max_candles: usize,
    pub trend: Trend,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            base_price: 100.0,
            volatility: 0.03,
            max_candles: 30,
            trend: Trend::Rising,
        }
    }
}

/// Source of uniform draws in `[0, 1)` feeding the generator.
///
/// A seam rather than a direct `Rng` bound so tests can pin every draw and
/// reproduce an exact candle.
pub trait UnitSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Production randomness backed by [`StdRng`].
#[derive(Debug)]
pub struct StdSource(StdRng);

impl StdSource {
    /// OS-seeded source for normal runs.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Fixed-seed source for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl UnitSource for StdSource {
    fn next_unit(&mut self) -> f64 {
        self.0.random()
    }
}

/// Maps a `[0, 1)` draw onto `[0.5, 1)`.
fn half_to_one(unit: f64) -> f64 {
    0.5 + 0.5 * unit
}

/// Rolling candle sequence plus the price-generation rule.
pub struct CandleSeries {
    config: SeriesConfig,
    candles: VecDeque<Candle>,
    source: Box<dyn UnitSource + Send>,
    /// Phase accumulator in `[0, 1)`; a rollover retires and appends.
    phase: f64,
    current_price: f64,
}

impl CandleSeries {
    /// Creates a series with OS-seeded randomness.
    #[must_use]
    pub fn new(config: SeriesConfig) -> Self {
        Self::with_source(config, Box::new(StdSource::from_entropy()))
    }

    /// Creates a series drawing from the given source.
    #[must_use]
    pub fn with_source(config: SeriesConfig, source: Box<dyn UnitSource + Send>) -> Self {
        let mut series = Self {
            candles: VecDeque::with_capacity(config.max_candles + 1),
            source,
            phase: 0.0,
            current_price: config.base_price,
            config,
        };
        series.seed();
        series
    }

    /// Regrows the series from scratch, chaining each candle's close into
    /// the next candle's open. The series is never empty afterwards.
    fn seed(&mut self) {
        self.candles.clear();
        self.phase = 0.0;

        let mut price = self.config.base_price;
        for _ in 0..self.config.max_candles.max(1) {
            let candle = self.generate_candle(price);
            price = candle.close;
            self.candles.push_back(candle);
        }
        self.current_price = price;
    }

    /// Discards the current candles and restarts from the base price.
    pub fn reseed(&mut self) {
        tracing::debug!(base_price = self.config.base_price, "reseeding series");
        self.seed();
    }

    /// Produces the next candle of the walk from `previous_close`.
    ///
    /// Four independent draws, in order: delta scale, wick scale, upper
    /// wick extent, lower wick extent. `previous_close` must be positive
    /// for the model to stay meaningful; that is a caller contract, not a
    /// checked error.
    pub fn generate_candle(&mut self, previous_close: f64) -> Candle {
        let open = previous_close;
        let delta = previous_close * self.config.volatility * half_to_one(self.source.next_unit());
        let close = open + self.config.trend.signum() * delta;

        let wick = (close - open).abs() * half_to_one(self.source.next_unit());
        let high = open.max(close) + wick * self.source.next_unit();
        let low = open.min(close) - wick * self.source.next_unit();

        Candle {
            open,
            high,
            low,
            close,
            bullish: close > open,
            fade: 1.0,
        }
    }

    /// Per-frame update. `elapsed` is the fraction of one candle interval
    /// covered since the previous call.
    ///
    /// On rollover the oldest candle's fade is stepped down (and the candle
    /// removed once fully faded), one new candle is appended from the last
    /// close, and the deque is capped at `max_candles + 1` so the crossfade
    /// can overlap by exactly one candle and no more.
    pub fn advance(&mut self, elapsed: f64) {
        self.phase += elapsed;
        if self.phase < 1.0 {
            return;
        }
        self.phase = 0.0;

        if let Some(oldest) = self.candles.front_mut() {
            oldest.fade -= FADE_STEP;
            if oldest.fade <= 0.0 {
                self.candles.pop_front();
            }
        }

        let last_close = self
            .candles
            .back()
            .map_or(self.config.base_price, |c| c.close);
        let candle = self.generate_candle(last_close);
        self.current_price = candle.close;
        self.candles.push_back(candle);

        while self.candles.len() > self.config.max_candles + 1 {
            self.candles.pop_front();
        }
    }

    /// Projects the current candles onto `layout`: one point per candle,
    /// oldest to newest, left to right, with each `y` mapping the candle's
    /// high price.
    ///
    /// A flat series (zero price range) has nothing to scale into, so every
    /// point sits on the vertical midline instead of dividing by zero.
    #[must_use]
    pub fn chart_path(&self, layout: &SurfaceLayout) -> Vec<ChartPathPoint> {
        let n = self.candles.len();
        let (min_price, max_price) = self.price_bounds();
        let range = max_price - min_price;
        let inner = layout.height - 2.0 * layout.padding;

        self.candles
            .iter()
            .enumerate()
            .map(|(i, candle)| {
                let x = layout.width - (n - i) as f64 * layout.stride;
                let y = if range <= f64::EPSILON {
                    layout.height / 2.0
                } else {
                    layout.padding + inner * (1.0 - (candle.high - min_price) / range)
                };
                ChartPathPoint {
                    x,
                    y,
                    price: candle.close,
                }
            })
            .collect()
    }

    /// Minimum and maximum price across all wick extremes.
    #[must_use]
    pub fn price_bounds(&self) -> (f64, f64) {
        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        for candle in &self.candles {
            min_price = min_price.min(candle.low);
            max_price = max_price.max(candle.high);
        }
        (min_price, max_price)
    }

    /// Returns the current candles, oldest first.
    #[must_use]
    pub fn candles(&self) -> &VecDeque<Candle> {
        &self.candles
    }

    /// Number of candles currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Always false after construction; the series never empties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Close of the most recently appended candle.
    #[must_use]
    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Price the series was seeded from.
    #[must_use]
    pub fn base_price(&self) -> f64 {
        self.config.base_price
    }

    /// Percent change of the current price against the base price.
    #[must_use]
    pub fn percent_change(&self) -> f64 {
        (self.current_price - self.config.base_price) / self.config.base_price * 100.0
    }

    /// Returns the generator configuration.
    #[must_use]
    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }
}

impl Default for CandleSeries {
    fn default() -> Self {
        Self::new(SeriesConfig::default())
    }
}
