//! HeliCat: a decorative, perpetually rising candlestick animation for the
//! terminal.
//!
//! The crate is built around one owned piece of state, the
//! [`CandleSeries`](series::CandleSeries): a rolling sequence of synthetic
//! OHLC candles whose price walk is rigged to trend in one direction. A
//! tick-driven TUI repaints the series every frame, and a
//! [`Mascot`](mascot::Mascot) samples the series' projected chart path to
//! ride along the candle tops.

pub mod config;
pub mod error;
pub mod mascot;
pub mod models;
pub mod series;
pub mod tui;

pub use error::{HeliCatError, Result};
