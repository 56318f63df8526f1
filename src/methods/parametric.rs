//! Parametric comparison routines: the paired t-test and Welch's unequal
//! variance t-test, with p-values taken from the Student's t distribution.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{MethylError, Result};

/// Two-sided p-value of the paired t-test.
///
/// The test operates on the per-index differences of the two vectors, so both
/// inputs must have the same length (checked by the dispatch layer) and at
/// least two pairs.
pub fn paired_t_test(x: &[f64], y: &[f64]) -> Result<f64> {
    let n = x.len();
    if n < 2 {
        return Err(MethylError::TooFewObservations {
            method: "t-test",
            found: n,
        });
    }

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let diff = a - b;
        sum += diff;
        sum_sq += diff * diff;
    }

    let n_f = n as f64;
    let mean = sum / n_f;
    let var = (sum_sq - sum * sum / n_f) / (n_f - 1.0);
    let std_err = (var / n_f).sqrt();

    let t_stat = mean / std_err;
    Ok(two_sided_t_p_value(t_stat, n_f - 1.0))
}

/// Two-sided p-value of Welch's two-sample t-test.
///
/// Tolerates unequal sample sizes and unequal variances; degrees of freedom
/// follow the Welch-Satterthwaite equation. Both samples need at least two
/// observations.
pub fn welch_t_test(x: &[f64], y: &[f64]) -> Result<f64> {
    let nx = x.len();
    let ny = y.len();
    if nx < 2 || ny < 2 {
        return Err(MethylError::TooFewObservations {
            method: "welch-test",
            found: nx.min(ny),
        });
    }

    let (mean_x, var_x) = mean_and_variance(x);
    let (mean_y, var_y) = mean_and_variance(y);

    let term_x = var_x / nx as f64;
    let term_y = var_y / ny as f64;
    let combined = term_x + term_y;

    let t_stat = (mean_x - mean_y) / combined.sqrt();
    let df = combined * combined
        / (term_x * term_x / (nx as f64 - 1.0) + term_y * term_y / (ny as f64 - 1.0));

    Ok(two_sided_t_p_value(t_stat, df))
}

fn mean_and_variance(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for &value in values {
        sum += value;
        sum_sq += value * value;
    }
    let mean = sum / n;
    let var = (sum_sq - sum * sum / n) / (n - 1.0);
    (mean, var)
}

fn two_sided_t_p_value(t_stat: f64, df: f64) -> f64 {
    if !t_stat.is_finite() {
        // Zero-variance input: an infinite statistic means a certain
        // difference, a NaN one means no evidence at all.
        return if t_stat.is_infinite() { 0.0 } else { 1.0 };
    }
    if df <= 0.0 || !df.is_finite() {
        return 1.0;
    }

    match StudentsT::new(0.0, 1.0, df) {
        Ok(t_dist) => 2.0 * (1.0 - t_dist.cdf(t_stat.abs())),
        Err(_) => 1.0,
    }
}
