use std::cmp::Ordering;

/// Summary statistics for one line's latency samples, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatSummary {
    pub count: usize,
    pub min: f64,
    pub mean: f64,
    pub median: f64,
    pub p99: f64,
    pub p100: f64,
}

impl StatSummary {
    /// Compute summary statistics from samples; `None` when there are no samples.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let sorted = sorted_copy(samples);
        Some(Self {
            count: samples.len(),
            min: sorted[0],
            mean: samples.iter().sum::<f64>() / samples.len() as f64,
            median: median_of_sorted(&sorted),
            p99: percentile(samples, 99.0),
            p100: percentile(samples, 100.0),
        })
    }
}

/// Value at percentile `p` in [0, 100], via linear interpolation between the
/// two closest ranks of the ascending-sorted samples. `p == 100` returns the
/// maximum exactly. Returns 0.0 for an empty slice; callers must treat that
/// as "undefined", not as a measurement.
pub fn percentile(samples: &[f64], p: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(samples);
    let n = sorted.len();
    if p == 100.0 {
        return sorted[n - 1];
    }
    let rank = (p / 100.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Standard sample median: mean of the two middle elements for even lengths.
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p100_is_exact_max() {
        let samples = [3.0, 1.0, 4.0, 1.5, 9.0, 2.6];
        assert_eq!(percentile(&samples, 100.0), 9.0);
    }

    #[test]
    fn p0_is_min() {
        let samples = [3.0, 1.0, 4.0, 1.5, 9.0, 2.6];
        assert_eq!(percentile(&samples, 0.0), 1.0);
    }

    #[test]
    fn repeated_value_is_constant_across_percentiles() {
        let samples = [7.0; 9];
        for p in [0.0, 25.0, 50.0, 99.0, 100.0] {
            assert_eq!(percentile(&samples, p), 7.0);
        }
    }

    #[test]
    fn invariant_under_reordering() {
        let a = [5.0, 2.0, 8.0, 1.0, 9.0];
        let b = [9.0, 1.0, 5.0, 8.0, 2.0];
        for p in [0.0, 37.5, 50.0, 99.0, 100.0] {
            assert_eq!(percentile(&a, p), percentile(&b, p));
        }
    }

    #[test]
    fn single_element_for_every_percentile() {
        for p in [0.0, 1.0, 50.0, 99.0, 100.0] {
            assert_eq!(percentile(&[42.5], p), 42.5);
        }
    }

    #[test]
    fn empty_returns_sentinel_zero() {
        assert_eq!(percentile(&[], 50.0), 0.0);
    }

    #[test]
    fn p99_interpolates_between_ranks() {
        // rank = 0.99 * 9 = 8.91 → 9 + 0.91 * (10 - 9) = 9.91
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let p99 = percentile(&samples, 99.0);
        assert!((p99 - 9.91).abs() < 1e-9);
        assert_eq!(percentile(&samples, 100.0), 10.0);
    }

    #[test]
    fn summary_of_empty_is_none() {
        assert!(StatSummary::from_samples(&[]).is_none());
    }

    #[test]
    fn summary_even_length_median_averages_middle_pair() {
        let s = StatSummary::from_samples(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.mean, 2.5);
        assert_eq!(s.median, 2.5);
        assert_eq!(s.p100, 4.0);
    }

    #[test]
    fn summary_odd_length_median_is_middle() {
        let s = StatSummary::from_samples(&[30.0, 10.0, 20.0]).unwrap();
        assert_eq!(s.median, 20.0);
        assert_eq!(s.mean, 20.0);
        assert_eq!(s.min, 10.0);
    }
}
