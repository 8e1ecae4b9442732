use histplot_common::{HistplotError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
    pub median: f64,
}

fn median_f64(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

pub fn summarize_samples(samples: &[f64]) -> Result<SampleSummary> {
    if samples.is_empty() {
        return Err(HistplotError::EmptyInput);
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let stddev = (samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(SampleSummary {
        count: samples.len(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        mean,
        stddev,
        median: median_f64(&sorted),
    })
}

#[cfg(test)]
mod tests_summarize {
    use super::*;

    #[test] fn empty_errors() { assert!(matches!(summarize_samples(&[]), Err(HistplotError::EmptyInput))); }
    #[test] fn single() { let s = summarize_samples(&[4.0]).unwrap(); assert_eq!(s.median, 4.0); assert_eq!(s.stddev, 0.0); }
    #[test] fn even_median() { let s = summarize_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap(); assert_eq!(s.median, 2.5); }
    #[test] fn mean_and_bounds() {
        let s = summarize_samples(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 3.0);
    }
}
