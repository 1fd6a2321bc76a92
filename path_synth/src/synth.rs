//! Price path synthesizer

use crate::error::{Result, SynthError};
use crate::gbm::{brownian_path, gbm_path, GbmParams};
use crate::rescale::{pin_endpoints, pin_extremes, rescale_to_range};
use crate::{CandleBounds, PricePath};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default number of timesteps: one per second of a one-minute candle
pub const DEFAULT_STEPS: usize = 60;

/// Synthesizes intra-minute price paths from candle bounds.
///
/// Randomness is injected per call, so callers control reproducibility
/// without touching any process-wide generator state.
#[derive(Debug, Clone)]
pub struct PathSynthesizer {
    /// Number of timesteps per path
    steps: usize,
    /// Time step size over the normalized window
    dt: f64,
}

impl PathSynthesizer {
    /// Create a synthesizer producing paths of `steps` samples.
    ///
    /// At least two samples are required so the path has distinct endpoints
    /// to pin to open and close.
    pub fn new(steps: usize) -> Result<Self> {
        if steps < 2 {
            return Err(SynthError::InvalidParameter(format!(
                "steps must be at least 2, got {}",
                steps
            )));
        }

        Ok(Self {
            steps,
            dt: 1.0 / steps as f64,
        })
    }

    /// Number of timesteps per synthesized path
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Synthesize one price path within the given bounds.
    ///
    /// The raw GBM trajectory is rescaled so its extremes land exactly on
    /// the candle's high and low, then the first and last samples are pinned
    /// to open and close. Pinning order is extremes first, endpoints second:
    /// `path[0] == open` and `path[last] == close` hold unconditionally,
    /// while the exact high/low touch is sacrificed in the rare case that
    /// the argmax or argmin falls on an endpoint.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        bounds: &CandleBounds,
        rng: &mut R,
    ) -> Result<PricePath> {
        let params = GbmParams::from_bounds(bounds);

        let brownian = brownian_path(rng, self.steps, self.dt);
        let raw = gbm_path(bounds.open(), &params, &brownian);

        let mut path = PricePath::new(rescale_to_range(&raw, bounds.low(), bounds.high())?);
        pin_extremes(path.values_mut(), bounds.low(), bounds.high());
        pin_endpoints(path.values_mut(), bounds.open(), bounds.close());

        Ok(path)
    }

    /// Synthesize one price path using a seeded generator.
    ///
    /// Identical seed and bounds produce an identical path.
    pub fn synthesize_seeded(&self, bounds: &CandleBounds, seed: u64) -> Result<PricePath> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.synthesize(bounds, &mut rng)
    }
}

impl Default for PathSynthesizer {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            dt: 1.0 / DEFAULT_STEPS as f64,
        }
    }
}
