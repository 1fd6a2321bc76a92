//! # Path Synth
//!
//! `path_synth` is a Rust library for synthesizing plausible intra-minute
//! price paths between known open/high/low/close bounds.
//!
//! A path is generated from a Geometric Brownian Motion (GBM) model whose
//! drift and volatility are derived from the candle bounds, then affinely
//! rescaled so its minimum and maximum coincide with the supplied low and
//! high, with the first and last samples pinned to the open and close.
//!
//! ## Usage Example
//!
//! ```
//! use path_synth::{CandleBounds, PathSynthesizer};
//!
//! // One minute of price action: open, close, high, low
//! let bounds = CandleBounds::new(1002.0, 1003.0, 1003.4, 1001.8)?;
//!
//! let synthesizer = PathSynthesizer::default();
//! let path = synthesizer.synthesize_seeded(&bounds, 42)?;
//!
//! assert_eq!(path.len(), 60);
//! assert_eq!(path.values()[0], 1002.0);
//! # Ok::<(), path_synth::SynthError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod error;
pub mod gbm;
pub mod rescale;
mod synth;

pub use error::{Result, SynthError};
pub use synth::{PathSynthesizer, DEFAULT_STEPS};

/// Candle direction derived from the open/close relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Close above open
    Bullish,
    /// Close below open
    Bearish,
    /// Close equal to open
    Flat,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Bullish => write!(f, "Bullish"),
            Direction::Bearish => write!(f, "Bearish"),
            Direction::Flat => write!(f, "Flat"),
        }
    }
}

/// Validated OHLC bounds for a single minute candle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleBounds {
    open: f64,
    close: f64,
    high: f64,
    low: f64,
}

impl CandleBounds {
    /// Create validated candle bounds.
    ///
    /// Requirements: all values finite, `open > 0` (the GBM drift takes a
    /// logarithm of `close / open` and volatility divides by `open`),
    /// `high > low` (rescaling divides by the range), and both open and
    /// close contained in `[low, high]`.
    pub fn new(open: f64, close: f64, high: f64, low: f64) -> Result<Self> {
        for (name, value) in [("open", open), ("close", close), ("high", high), ("low", low)] {
            if !value.is_finite() {
                return Err(SynthError::InvalidBounds(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if open <= 0.0 {
            return Err(SynthError::InvalidBounds(format!(
                "open must be positive, got {}",
                open
            )));
        }

        if high <= low {
            return Err(SynthError::InvalidBounds(format!(
                "high ({}) must be strictly above low ({})",
                high, low
            )));
        }

        if open < low || open > high {
            return Err(SynthError::InvalidBounds(format!(
                "open ({}) must lie within [{}, {}]",
                open, low, high
            )));
        }

        if close < low || close > high {
            return Err(SynthError::InvalidBounds(format!(
                "close ({}) must lie within [{}, {}]",
                close, low, high
            )));
        }

        Ok(Self {
            open,
            close,
            high,
            low,
        })
    }

    /// Opening price of the minute
    pub fn open(&self) -> f64 {
        self.open
    }

    /// Closing price of the minute
    pub fn close(&self) -> f64 {
        self.close
    }

    /// Highest price of the minute
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Lowest price of the minute
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Price range covered by the candle
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Direction of the candle based on open and close
    pub fn direction(&self) -> Direction {
        if self.close > self.open {
            Direction::Bullish
        } else if self.close < self.open {
            Direction::Bearish
        } else {
            Direction::Flat
        }
    }
}

/// Ordered sequence of simulated prices, one per intra-minute timestep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePath {
    values: Vec<f64>,
}

impl PricePath {
    /// Create a price path from raw values.
    ///
    /// Paths are normally produced by [`PathSynthesizer`]; this constructor
    /// exists for callers that carry pre-computed sequences.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// The simulated prices
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of timesteps in the path
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the path holds no samples
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First price of the path, if any
    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Last price of the path, if any
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Lowest price in the path
    pub fn min_price(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Highest price in the path
    pub fn max_price(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Consume the path, returning the underlying values
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        let bounds = CandleBounds::new(1002.0, 1003.0, 1003.4, 1001.8).unwrap();
        assert_eq!(bounds.open(), 1002.0);
        assert_eq!(bounds.close(), 1003.0);
        assert_eq!(bounds.high(), 1003.4);
        assert_eq!(bounds.low(), 1001.8);
    }

    #[test]
    fn test_candle_direction() {
        let bullish = CandleBounds::new(1002.0, 1003.0, 1003.4, 1001.8).unwrap();
        assert_eq!(bullish.direction(), Direction::Bullish);

        let bearish = CandleBounds::new(1001.0, 1000.5, 1001.2, 1000.3).unwrap();
        assert_eq!(bearish.direction(), Direction::Bearish);

        let flat = CandleBounds::new(100.0, 100.0, 101.0, 99.0).unwrap();
        assert_eq!(flat.direction(), Direction::Flat);
    }

    #[test]
    fn test_candle_range() {
        let bounds = CandleBounds::new(1002.0, 1003.0, 1003.4, 1001.8).unwrap();
        assert!((bounds.range() - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_price_path_accessors() {
        let path = PricePath::new(vec![3.0, 1.0, 2.0]);
        assert_eq!(path.len(), 3);
        assert!(!path.is_empty());
        assert_eq!(path.first(), Some(3.0));
        assert_eq!(path.last(), Some(2.0));
        assert_eq!(path.min_price(), 1.0);
        assert_eq!(path.max_price(), 3.0);
        assert_eq!(path.into_values(), vec![3.0, 1.0, 2.0]);
    }
}
