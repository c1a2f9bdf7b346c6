//! Chart-path projection types.

use serde::Serialize;

/// Drawing-surface position of one candle's high, plus its closing price.
///
/// A path is a view over the current series: recomputed on every request,
/// never stored. Consumers sample the point whose index corresponds to
/// their own horizontal position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPathPoint {
    pub x: f64,
    pub y: f64,
    /// Closing price of the candle this point belongs to.
    pub price: f64,
}

/// Geometry of the drawing surface the path is projected onto.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceLayout {
    pub width: f64,
    pub height: f64,
    /// Horizontal distance between adjacent candles (body plus spacing).
    pub stride: f64,
    /// Vertical padding reserved above and below the price range.
    pub padding: f64,
}
