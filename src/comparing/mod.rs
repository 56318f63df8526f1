//! The pairwise comparison engine.
//!
//! Two comparers share one algorithm and differ only in how the beta-value
//! vector for an item is extracted: the sample comparer takes one sample's
//! column across all rows, the region comparer takes every beta value of the
//! rows matching one chromosome or gene token.
//!
//! Pairs are independent of each other, so they are computed on the rayon
//! pool and merged back in `(i, j)` order; pair ordering and per-method
//! outcome ordering are part of the observable contract.

use itertools::Itertools;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::error::{MethylError, Result};
use crate::methods::StatMethod;
use crate::model::{ComparisonResult, MethylationTable, PositionKind};

/// Compare the named samples pairwise with the requested methods.
///
/// Every name must resolve to a column of the table; an unknown name fails
/// the whole call before any comparison work starts. Pairs in which either
/// column carries a missing value are skipped with a warning, never failing
/// the run.
pub fn compare_samples(
    table: &MethylationTable,
    sample_names: &[String],
    methods: &[StatMethod],
) -> Result<ComparisonResult> {
    info!("comparing {} sample(s) with {methods:?}", sample_names.len());

    let vectors: Vec<Vec<f64>> = sample_names
        .iter()
        .map(|name| {
            table
                .sample_position(name)
                .map(|column| table.sample_beta_values(column))
                .ok_or_else(|| MethylError::UnknownSample(name.clone()))
        })
        .collect::<Result<_>>()?;

    let result = compare_pairwise(sample_names, &vectors, methods)?;

    info!(
        "successfully compared samples, {} pair(s) in the result",
        result.n_pairs()
    );
    Ok(result)
}

/// Compare chromosome or gene regions pairwise with the requested methods.
///
/// Region vectors commonly differ in length (regions cover different numbers
/// of rows), so any method requiring equal-length input fails the call unless
/// the request is Welch-only.
pub fn compare_regions(
    table: &MethylationTable,
    kind: PositionKind,
    tokens: &[String],
    methods: &[StatMethod],
) -> Result<ComparisonResult> {
    info!("comparing {} {}(s) with {methods:?}", tokens.len(), kind.name());

    let vectors: Vec<Vec<f64>> = tokens
        .iter()
        .map(|token| table.position_beta_values(kind, token))
        .collect();

    let result = compare_pairwise(tokens, &vectors, methods)?;

    info!(
        "successfully compared {}s, {} pair(s) in the result",
        kind.name(),
        result.n_pairs()
    );
    Ok(result)
}

/// Core pair loop over pre-extracted vectors.
///
/// Each unordered pair `(i, j)` with `i < j` is computed independently; the
/// per-pair outcomes are merged back in pair order so the result rows follow
/// the lexicographic `(i, j)` order of the input tokens.
fn compare_pairwise(
    labels: &[String],
    vectors: &[Vec<f64>],
    methods: &[StatMethod],
) -> Result<ComparisonResult> {
    let pairs: Vec<(usize, usize)> = (0..labels.len()).tuple_combinations().collect();

    let computed: Vec<Option<(String, Vec<f64>)>> = pairs
        .par_iter()
        .map(|&(i, j)| compare_pair(labels, vectors, methods, i, j))
        .collect::<Result<_>>()?;

    let mut result = ComparisonResult::new(methods);
    for (label, values) in computed.into_iter().flatten() {
        result.push_pair(label, values)?;
    }
    Ok(result)
}

/// Compare one pair. Returns `Ok(None)` when the pair is skipped because of
/// missing values; one bad pair must never abort the whole run.
fn compare_pair(
    labels: &[String],
    vectors: &[Vec<f64>],
    methods: &[StatMethod],
    i: usize,
    j: usize,
) -> Result<Option<(String, Vec<f64>)>> {
    let left = &vectors[i];
    let right = &vectors[j];

    debug!(
        "vector sizes: {} = {}, {} = {}",
        labels[i],
        left.len(),
        labels[j],
        right.len()
    );

    // A caller who explicitly picked an equal-length method for unequal
    // vectors misconfigured the run; this is fatal, not skippable.
    if left.len() != right.len() && methods.iter().any(StatMethod::requires_equal_len) {
        return Err(MethylError::UnequalLengths {
            left: left.len(),
            right: right.len(),
        });
    }

    let has_missing = left.iter().chain(right).any(|v| v.is_nan());
    if has_missing {
        warn!(
            "found missing value(s) in the comparison {} vs {}, excluding this pair and \
             continuing; remove missing rows to compare it",
            labels[i], labels[j]
        );
        return Ok(None);
    }

    let values: Vec<f64> = methods
        .iter()
        .map(|method| method.apply(left, right))
        .collect::<Result<_>>()?;

    Ok(Some((format!("{},{}", labels[i], labels[j]), values)))
}
