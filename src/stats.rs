//! Numeric helpers for optional outlier handling.

/// Clipping bounds derived from the interquartile range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IqrBounds {
    /// Values below this bound clip upward to it.
    pub lower: f64,
    /// Values above this bound clip downward to it.
    pub upper: f64,
}

/// Compute `Q1 - 1.5*IQR` / `Q3 + 1.5*IQR` bounds for a sample.
///
/// Quartiles use linear interpolation between order statistics. Returns
/// `None` for an empty sample.
pub fn iqr_bounds(values: &[f64]) -> Option<IqrBounds> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let q1 = quantile(&sorted, 0.25);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    Some(IqrBounds {
        lower: q1 - 1.5 * iqr,
        upper: q3 + 1.5 * iqr,
    })
}

/// Clip outliers in place against the sample's own IQR bounds.
///
/// Values above the upper bound clip to the upper bound and values below
/// the lower bound clip to the lower bound. Returns the number of clipped
/// values.
pub fn clip_outliers(values: &mut [f64]) -> usize {
    let Some(bounds) = iqr_bounds(values) else {
        return 0;
    };
    let mut clipped = 0;
    for value in values.iter_mut() {
        if *value > bounds.upper {
            *value = bounds.upper;
            clipped += 1;
        } else if *value < bounds.lower {
            *value = bounds.lower;
            clipped += 1;
        }
    }
    clipped
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len() - 1;
    let position = q * last as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    if below == above {
        return sorted[below];
    }
    let weight = position - below as f64;
    sorted[below] * (1.0 - weight) + sorted[above] * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_straddle_an_even_sample() {
        let bounds = iqr_bounds(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        // Q1 = 1.75, Q3 = 3.25, IQR = 1.5.
        assert!((bounds.lower - (-0.5)).abs() < 1e-9);
        assert!((bounds.upper - 5.5).abs() < 1e-9);
    }

    #[test]
    fn clipping_moves_each_tail_toward_its_own_bound() {
        let mut values = vec![10.0, 11.0, 12.0, 11.0, 10.0, 12.0, 11.0, 100.0, -60.0];
        let clipped = clip_outliers(&mut values);

        assert_eq!(clipped, 2);
        let max = values.iter().cloned().fold(f64::MIN, f64::max);
        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        // The high outlier lands on the upper bound and the low outlier on
        // the lower bound; they must not collapse onto the same threshold.
        assert!(max < 100.0);
        assert!(min > -60.0);
        assert_ne!(max, min);
        assert_eq!(values[2], 12.0);
    }

    #[test]
    fn interior_values_survive_unchanged() {
        let mut values = vec![5.0, 6.0, 7.0, 8.0];
        assert_eq!(clip_outliers(&mut values), 0);
        assert_eq!(values, vec![5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn empty_samples_have_no_bounds() {
        assert_eq!(iqr_bounds(&[]), None);
        let mut empty: Vec<f64> = Vec::new();
        assert_eq!(clip_outliers(&mut empty), 0);
    }
}
