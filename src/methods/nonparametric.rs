//! Nonparametric comparison routines: Spearman rank correlation and the
//! Wilcoxon signed-rank statistic. Both operate on average ranks with ties
//! shared between the tied positions.

use std::cmp::Ordering;

use crate::error::{MethylError, Result};

/// Spearman rank correlation coefficient of two equal-length vectors.
///
/// Ranks both vectors (ties averaged) and computes the Pearson correlation of
/// the ranks. Constant input has zero rank variance and no defined
/// correlation, so it comes back as NaN.
pub fn spearman(x: &[f64], y: &[f64]) -> Result<f64> {
    let n = x.len();
    if n < 2 {
        return Err(MethylError::TooFewObservations {
            method: "spearman",
            found: n,
        });
    }

    let ranks_x = average_ranks(x);
    let ranks_y = average_ranks(y);

    let n_f = n as f64;
    let mean_x = ranks_x.iter().sum::<f64>() / n_f;
    let mean_y = ranks_y.iter().sum::<f64>() / n_f;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (rx, ry) in ranks_x.iter().zip(&ranks_y) {
        let dx = rx - mean_x;
        let dy = ry - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    Ok(covariance / (var_x * var_y).sqrt())
}

/// Wilcoxon signed-rank statistic W+ of two equal-length (paired) vectors.
///
/// Zero differences are dropped before ranking; if nothing remains the
/// sample is too small for the test and the call is rejected.
pub fn wilcoxon_signed_rank(x: &[f64], y: &[f64]) -> Result<f64> {
    let diffs: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(&a, &b)| a - b)
        .filter(|d| *d != 0.0)
        .collect();

    if diffs.is_empty() {
        return Err(MethylError::TooFewObservations {
            method: "wilcoxon-test",
            found: 0,
        });
    }

    let abs_diffs: Vec<f64> = diffs.iter().map(|d| d.abs()).collect();
    let ranks = average_ranks(&abs_diffs);

    let w_plus = diffs
        .iter()
        .zip(&ranks)
        .filter(|(diff, _)| **diff > 0.0)
        .map(|(_, rank)| *rank)
        .sum();

    Ok(w_plus)
}

/// Assign 1-based ranks to `values`, giving tied values the average of the
/// ranks they span.
pub(crate) fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i + 1;
        while j < order.len() && values[order[j]] == values[order[i]] {
            j += 1;
        }

        // Average rank across the tied run [i, j).
        let rank = (i + j - 1) as f64 / 2.0 + 1.0;
        for &position in &order[i..j] {
            ranks[position] = rank;
        }

        i = j;
    }

    ranks
}
