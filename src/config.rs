//! Application configuration loaded from environment variables.
//!
//! Every variable is optional and falls back to a sensible default:
//! - `HELICAT_BASE_PRICE` — seed price for the first candle (default 100)
//! - `HELICAT_VOLATILITY` — per-candle move fraction in (0, 1] (default 0.03)
//! - `HELICAT_MAX_CANDLES` — steady-state series length, >= 2 (default 30)
//! - `HELICAT_TICK_MS` — animation tick interval in milliseconds (default 33)
//! - `HELICAT_SPEED` — phase fraction advanced per tick in (0, 1] (default 0.02)
//! - `HELICAT_TREND` — `rising` or `falling` (default `rising`)
//! - `HELICAT_SEED` — fixed RNG seed for reproducible runs (default: OS entropy)
//!
//! Malformed or out-of-range values are configuration errors rather than
//! silent fallbacks.

use std::fmt::Display;
use std::str::FromStr;

use crate::series::Trend;

const DEFAULT_BASE_PRICE: f64 = 100.0;
const DEFAULT_VOLATILITY: f64 = 0.03;
const DEFAULT_MAX_CANDLES: usize = 30;
const DEFAULT_TICK_MS: u64 = 33;
const DEFAULT_SPEED: f64 = 0.02;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub chart: ChartConfig,
}

/// Chart and animation tunables.
#[derive(Debug, Clone, Copy)]
pub struct ChartConfig {
    pub base_price: f64,
    pub volatility: f64,
    pub max_candles: usize,
    pub tick_ms: u64,
    /// Fraction of one candle interval covered per tick.
    pub speed: f64,
    pub trend: Trend,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`HeliCatError::Config`](crate::HeliCatError::Config) if a
/// variable is set to a non-numeric or out-of-range value, or if
/// `HELICAT_TREND` names an unknown trend.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_price = parsed_var("HELICAT_BASE_PRICE")?.unwrap_or(DEFAULT_BASE_PRICE);
    if base_price <= 0.0 {
        return Err(crate::HeliCatError::Config(format!(
            "HELICAT_BASE_PRICE must be positive, got {base_price}"
        )));
    }

    let volatility = parsed_var("HELICAT_VOLATILITY")?.unwrap_or(DEFAULT_VOLATILITY);
    if !(volatility > 0.0 && volatility <= 1.0) {
        return Err(crate::HeliCatError::Config(format!(
            "HELICAT_VOLATILITY must be in (0, 1], got {volatility}"
        )));
    }

    let max_candles = parsed_var("HELICAT_MAX_CANDLES")?.unwrap_or(DEFAULT_MAX_CANDLES);
    if max_candles < 2 {
        return Err(crate::HeliCatError::Config(format!(
            "HELICAT_MAX_CANDLES must be at least 2, got {max_candles}"
        )));
    }

    let tick_ms = parsed_var("HELICAT_TICK_MS")?.unwrap_or(DEFAULT_TICK_MS);
    if tick_ms == 0 {
        return Err(crate::HeliCatError::Config(
            "HELICAT_TICK_MS must be at least 1".to_string(),
        ));
    }

    let speed = parsed_var("HELICAT_SPEED")?.unwrap_or(DEFAULT_SPEED);
    if !(speed > 0.0 && speed <= 1.0) {
        return Err(crate::HeliCatError::Config(format!(
            "HELICAT_SPEED must be in (0, 1], got {speed}"
        )));
    }

    let trend = match non_empty_var("HELICAT_TREND") {
        None => Trend::Rising,
        Some(raw) => match raw.to_lowercase().as_str() {
            "rising" | "up" => Trend::Rising,
            "falling" | "down" => Trend::Falling,
            other => {
                return Err(crate::HeliCatError::Config(format!(
                    "HELICAT_TREND must be 'rising' or 'falling', got {other:?}"
                )));
            }
        },
    };

    let seed = parsed_var("HELICAT_SEED")?;

    Ok(AppConfig {
        chart: ChartConfig {
            base_price,
            volatility,
            max_candles,
            tick_ms,
            speed,
            trend,
            seed,
        },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Parses an optional environment variable, mapping parse failures to a
/// configuration error that names the variable.
fn parsed_var<T>(name: &str) -> crate::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match non_empty_var(name) {
        None => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(|e| {
            crate::HeliCatError::Config(format!("{name}: invalid value {raw:?}: {e}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    /// Serializes env-mutating tests; the process environment is global.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: ENV_LOCK serializes every reader and writer of these vars.
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values with ENV_LOCK still held.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    const ALL_VARS: [&str; 7] = [
        "HELICAT_BASE_PRICE",
        "HELICAT_VOLATILITY",
        "HELICAT_MAX_CANDLES",
        "HELICAT_TICK_MS",
        "HELICAT_SPEED",
        "HELICAT_TREND",
        "HELICAT_SEED",
    ];

    fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
        ALL_VARS.iter().map(|v| (*v, None)).collect()
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(&cleared(), || {
            let config = fetch_config().unwrap();
            assert_eq!(config.chart.base_price, 100.0);
            assert_eq!(config.chart.volatility, 0.03);
            assert_eq!(config.chart.max_candles, 30);
            assert_eq!(config.chart.tick_ms, 33);
            assert_eq!(config.chart.speed, 0.02);
            assert_eq!(config.chart.trend, Trend::Rising);
            assert!(config.chart.seed.is_none());
        });
    }

    #[test]
    fn loads_overrides_from_env() {
        let mut vars = cleared();
        vars[0] = ("HELICAT_BASE_PRICE", Some("250"));
        vars[2] = ("HELICAT_MAX_CANDLES", Some("12"));
        vars[5] = ("HELICAT_TREND", Some("falling"));
        vars[6] = ("HELICAT_SEED", Some("42"));
        with_env(&vars, || {
            let config = fetch_config().unwrap();
            assert_eq!(config.chart.base_price, 250.0);
            assert_eq!(config.chart.max_candles, 12);
            assert_eq!(config.chart.trend, Trend::Falling);
            assert_eq!(config.chart.seed, Some(42));
        });
    }

    #[test]
    fn rejects_non_numeric_value() {
        let mut vars = cleared();
        vars[1] = ("HELICAT_VOLATILITY", Some("lots"));
        with_env(&vars, || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("HELICAT_VOLATILITY"));
        });
    }

    #[test]
    fn rejects_out_of_range_volatility() {
        let mut vars = cleared();
        vars[1] = ("HELICAT_VOLATILITY", Some("1.5"));
        with_env(&vars, || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("must be in (0, 1]"));
        });
    }

    #[test]
    fn rejects_negative_base_price() {
        let mut vars = cleared();
        vars[0] = ("HELICAT_BASE_PRICE", Some("-5"));
        with_env(&vars, || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("must be positive"));
        });
    }

    #[test]
    fn rejects_unknown_trend() {
        let mut vars = cleared();
        vars[5] = ("HELICAT_TREND", Some("sideways"));
        with_env(&vars, || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("HELICAT_TREND"));
        });
    }

    #[test]
    fn empty_values_treated_as_absent() {
        let mut vars = cleared();
        vars[0] = ("HELICAT_BASE_PRICE", Some(""));
        vars[5] = ("HELICAT_TREND", Some(""));
        with_env(&vars, || {
            let config = fetch_config().unwrap();
            assert_eq!(config.chart.base_price, 100.0);
            assert_eq!(config.chart.trend, Trend::Rising);
        });
    }
}
