//! Synthetic OHLC candle model.

use serde::Serialize;

/// A single synthetic candlestick bar.
///
/// Candles are generated, never parsed: every value comes out of
/// [`CandleSeries`](crate::series::CandleSeries) with the wick extremes
/// already enclosing the body (`high >= max(open, close)` and
/// `low <= min(open, close)`).
#[derive(Debug, Clone, Serialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Whether the close is above the open.
    pub bullish: bool,
    /// Opacity while the candle is being retired: 1.0 for live candles,
    /// stepped toward 0.0 once the candle reaches the front of the series.
    pub fade: f64,
}

impl Candle {
    /// Top of the open/close body.
    #[must_use]
    pub fn body_top(&self) -> f64 {
        self.open.max(self.close)
    }

    /// Bottom of the open/close body.
    #[must_use]
    pub fn body_bottom(&self) -> f64 {
        self.open.min(self.close)
    }

    /// Whether this candle is mid-retirement.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade < 1.0
    }
}
