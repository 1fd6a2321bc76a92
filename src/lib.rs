//! # Minute Path
//!
//! `minute_path_workspace` ties together the two member crates of the
//! minute_path project:
//!
//! - [`path_synth`] — pure synthesis of intra-minute price paths from OHLC
//!   candle bounds via a rescaled Geometric Brownian Motion model
//! - [`path_chart`] — rendering of synthesized paths as PNG charts
//!
//! ## Example
//!
//! ```
//! use minute_path_workspace::{CandleBounds, PathSynthesizer};
//!
//! let bounds = CandleBounds::new(1002.0, 1003.0, 1003.4, 1001.8)?;
//! let path = PathSynthesizer::default().synthesize_seeded(&bounds, 42)?;
//!
//! assert_eq!(path.len(), 60);
//! assert_eq!(path.first(), Some(1002.0));
//! assert_eq!(path.last(), Some(1003.0));
//! # Ok::<(), path_synth::SynthError>(())
//! ```

pub use path_chart::{render_path_chart, ChartError, ChartStyle};
pub use path_synth::{
    CandleBounds, Direction, PathSynthesizer, PricePath, SynthError, DEFAULT_STEPS,
};
