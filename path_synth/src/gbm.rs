//! Geometric Brownian Motion building blocks
//!
//! The synthesizer derives GBM parameters from the candle bounds, draws a
//! discrete Brownian path from an injected random source, and exponentiates
//! the resulting log-path into a raw price trajectory.

use crate::CandleBounds;
use rand::Rng;
use rand_distr::StandardNormal;

/// Drift and volatility parameters for the GBM model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmParams {
    /// Deterministic trend of the log-price process
    pub mu: f64,
    /// Magnitude of random fluctuation
    pub sigma: f64,
}

impl GbmParams {
    /// Derive GBM parameters from candle bounds.
    ///
    /// Drift is `ln(close / open)` so the deterministic component of the
    /// trajectory trends from open towards close; volatility is
    /// `(high - low) / open`, the candle range as a fraction of the open.
    pub fn from_bounds(bounds: &CandleBounds) -> Self {
        Self {
            mu: (bounds.close() / bounds.open()).ln(),
            sigma: bounds.range() / bounds.open(),
        }
    }
}

/// Generate a discrete Brownian path of `steps` samples.
///
/// Standard-normal increments are cumulatively summed and scaled by
/// `sqrt(dt)`, giving `W_i = sqrt(dt) * sum(z_0..=z_i)`.
pub fn brownian_path<R: Rng + ?Sized>(rng: &mut R, steps: usize, dt: f64) -> Vec<f64> {
    let sqrt_dt = dt.sqrt();
    let mut path = Vec::with_capacity(steps);
    let mut cumulative = 0.0;

    for _ in 0..steps {
        let z: f64 = rng.sample(StandardNormal);
        cumulative += z;
        path.push(cumulative * sqrt_dt);
    }

    path
}

/// Compute the raw GBM price trajectory over a normalized time grid.
///
/// For each step `i` with `t_i = i / (n - 1)`:
/// `S_i = open * exp((mu - sigma^2 / 2) * t_i + sigma * W_i)`.
/// The result is unbounded with respect to the candle's high/low; the
/// rescale step maps it back inside the bounds.
pub fn gbm_path(open: f64, params: &GbmParams, brownian: &[f64]) -> Vec<f64> {
    let n = brownian.len();
    if n < 2 {
        return brownian.iter().map(|_| open).collect();
    }

    let drift = params.mu - 0.5 * params.sigma.powi(2);

    brownian
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let t = i as f64 / (n - 1) as f64;
            open * (drift * t + params.sigma * w).exp()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_params_from_bounds() {
        let bounds = CandleBounds::new(1002.0, 1003.0, 1003.4, 1001.8).unwrap();
        let params = GbmParams::from_bounds(&bounds);

        assert!((params.mu - (1003.0f64 / 1002.0).ln()).abs() < 1e-12);
        assert!((params.sigma - 1.6 / 1002.0).abs() < 1e-12);
    }

    #[test]
    fn test_bearish_drift_is_negative() {
        let bounds = CandleBounds::new(1001.0, 1000.5, 1001.2, 1000.3).unwrap();
        let params = GbmParams::from_bounds(&bounds);
        assert!(params.mu < 0.0);
    }

    #[test]
    fn test_brownian_path_is_deterministic_per_seed() {
        let mut rng_a = StdRng::seed_from_u64(9);
        let mut rng_b = StdRng::seed_from_u64(9);

        let path_a = brownian_path(&mut rng_a, 60, 1.0 / 60.0);
        let path_b = brownian_path(&mut rng_b, 60, 1.0 / 60.0);

        assert_eq!(path_a.len(), 60);
        assert_eq!(path_a, path_b);
    }

    #[test]
    fn test_gbm_path_stays_positive() {
        let bounds = CandleBounds::new(1002.0, 1003.0, 1003.4, 1001.8).unwrap();
        let params = GbmParams::from_bounds(&bounds);
        let mut rng = StdRng::seed_from_u64(3);

        let brownian = brownian_path(&mut rng, 60, 1.0 / 60.0);
        let prices = gbm_path(bounds.open(), &params, &brownian);

        assert_eq!(prices.len(), 60);
        assert!(prices.iter().all(|p| *p > 0.0));
    }
}
