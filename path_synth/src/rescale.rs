//! Affine rescaling of a raw trajectory onto candle bounds

use crate::error::{Result, SynthError};

/// Affinely map a series' own min/max onto `[low, high]`.
///
/// The transform is order-preserving: shift by the series minimum, scale by
/// `(high - low) / range`, then add `low` back. A zero raw range cannot be
/// mapped and is reported as a degenerate trajectory.
pub fn rescale_to_range(values: &[f64], low: f64, high: f64) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(SynthError::InvalidParameter(
            "cannot rescale an empty series".to_string(),
        ));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range <= 0.0 || !range.is_finite() {
        return Err(SynthError::DegenerateTrajectory(format!(
            "raw trajectory range is {} and cannot be mapped onto [{}, {}]",
            range, low, high
        )));
    }

    let scale = (high - low) / range;

    Ok(values.iter().map(|&v| (v - min) * scale + low).collect())
}

/// Overwrite the argmax/argmin samples with exactly `high`/`low`.
///
/// Guards against floating-point rounding leaving the extremes slightly off
/// the literal bound values after rescaling.
pub fn pin_extremes(values: &mut [f64], low: f64, high: f64) {
    if values.is_empty() {
        return;
    }

    let mut idx_min = 0;
    let mut idx_max = 0;

    for (i, &v) in values.iter().enumerate() {
        if v < values[idx_min] {
            idx_min = i;
        }
        if v > values[idx_max] {
            idx_max = i;
        }
    }

    values[idx_max] = high;
    values[idx_min] = low;
}

/// Overwrite the first and last samples with `open` and `close`.
///
/// Applied after [`pin_extremes`], so the endpoints always win: when the
/// argmax or argmin falls on an endpoint, the exact high/low touch placed
/// there is replaced by the open or close.
pub fn pin_endpoints(values: &mut [f64], open: f64, close: f64) {
    if let Some(first) = values.first_mut() {
        *first = open;
    }
    if let Some(last) = values.last_mut() {
        *last = close;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_maps_extremes_onto_bounds() {
        let rescaled = rescale_to_range(&[3.0, 1.0, 2.0], 10.0, 20.0).unwrap();
        assert_eq!(rescaled, vec![20.0, 10.0, 15.0]);
    }

    #[test]
    fn test_constant_series_is_degenerate() {
        let result = rescale_to_range(&[5.0, 5.0, 5.0], 1.0, 2.0);
        match result {
            Err(SynthError::DegenerateTrajectory(_)) => {}
            other => panic!("Expected DegenerateTrajectory, got {:?}", other),
        }
    }

    #[test]
    fn test_pin_extremes_hits_bounds_exactly() {
        let mut values = vec![10.000001, 19.999999, 15.0];
        pin_extremes(&mut values, 10.0, 20.0);
        assert_eq!(values, vec![10.0, 20.0, 15.0]);
    }

    #[test]
    fn test_endpoints_overwrite_pinned_extremes() {
        // argmax at index 0 and argmin at the last index
        let mut values = vec![20.0, 15.0, 10.0];
        pin_extremes(&mut values, 10.0, 20.0);
        pin_endpoints(&mut values, 17.0, 12.0);
        assert_eq!(values, vec![17.0, 15.0, 12.0]);
    }
}
