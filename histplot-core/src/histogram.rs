use histplot_common::{HistplotError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

/// Partition [min, max] into `bins` equal-width intervals, half-open except
/// the last, and count the samples falling in each.
pub fn build_histogram(samples: &[f64], bins: usize) -> Result<Vec<HistogramBin>> {
    if samples.is_empty() {
        return Err(HistplotError::EmptyInput);
    }
    if bins == 0 {
        return Err(HistplotError::Other("bin count must be positive".into()));
    }
    let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    // degenerate domain: widen around the lone value so equal-width bins stay defined
    let (lo, hi) = if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0u64; bins];
    for &v in samples {
        let idx = ((v - lo) / width) as usize;
        let idx = idx.min(bins - 1); // v == hi lands in the last (closed) bin
        counts[idx] += 1;
    }
    Ok(counts
        .iter()
        .enumerate()
        .map(|(i, &c)| HistogramBin {
            lower: lo + i as f64 * width,
            upper: lo + (i + 1) as f64 * width,
            count: c,
        })
        .collect())
}

#[cfg(test)]
mod tests_build_histogram {
    use super::*;

    fn counts(samples: &[f64], bins: usize) -> Vec<u64> {
        build_histogram(samples, bins).unwrap().iter().map(|b| b.count).collect()
    }

    #[test] fn empty_input() { assert!(matches!(build_histogram(&[], 10), Err(HistplotError::EmptyInput))); }
    #[test] fn zero_bins() { assert!(build_histogram(&[1.0], 0).is_err()); }
    #[test] fn counts_sum() { assert_eq!(counts(&[1.0, 1.1, 2.9, 3.0], 10).iter().sum::<u64>(), 4); }
    #[test] fn max_in_last_bin() { assert_eq!(*counts(&[0.0, 10.0], 10).last().unwrap(), 1); }
    #[test] fn uniform_spread() { assert_eq!(counts(&[0.5, 1.5, 2.5], 3), vec![1, 1, 1]); }
    #[test] fn single_value_widens() {
        let bins = build_histogram(&[2.0, 2.0, 2.0], 10).unwrap();
        assert!((bins[0].lower - 1.5).abs() < 1e-12);
        assert!((bins[9].upper - 2.5).abs() < 1e-12);
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 3);
    }
    #[test] fn bounds_are_contiguous() {
        let bins = build_histogram(&[1.0, 2.0, 3.0], 10).unwrap();
        for pair in bins.windows(2) {
            assert!((pair[0].upper - pair[1].lower).abs() < 1e-12);
        }
    }
}
