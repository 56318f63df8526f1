//! The filtering engine: four independent transformations of a
//! [`MethylationTable`], each idempotent for a given argument set and each
//! narrowing the current state of the table further on repeated application.
//!
//! When composed, the pipeline order is fixed: sample filter, then positional
//! filter, then cutoff filter. Sample filtering changes which columns the
//! later steps see, so the order is part of the contract. Missing-value
//! removal may run at either end, on explicit request.

use log::{debug, info};

use crate::error::Result;
use crate::model::{MethylationTable, PositionKind};

/// Direction of the cutoff filter: keep hyper-methylated values (at or above
/// the cutoff) or hypo-methylated ones (at or below it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoffDirection {
    Upper,
    Lower,
}

/// Keep only the named sample columns, in the order `names` gives them.
///
/// The sample list is replaced wholesale and every row's beta values are
/// reordered to match. Names absent from the table are simply not part of
/// the result; rejecting them up front is the sample check's job, not this
/// function's.
pub fn filter_by_samples(table: &mut MethylationTable, names: &[String]) -> Result<()> {
    info!("filtering on sample(s) {names:?}");

    let mut columns_to_keep = Vec::new();
    let mut kept_samples = Vec::new();
    for name in names {
        if let Some(position) = table.sample_position(name) {
            columns_to_keep.push(position);
            kept_samples.push(name.clone());
        }
    }

    debug!("keeping {} of {} sample columns", columns_to_keep.len(), table.n_samples());

    let per_row_values: Vec<Vec<f64>> = table
        .rows()
        .iter()
        .map(|row| {
            columns_to_keep
                .iter()
                .map(|&column| row.beta_values()[column])
                .collect()
        })
        .collect();

    table.replace_columns(kept_samples, per_row_values)?;

    info!("successfully filtered on sample(s)");
    Ok(())
}

/// Keep only the rows whose chromosome or gene matches one of `values`
/// (case-insensitive). At most one positional filter runs per invocation:
/// chromosome and gene filtering are mutually exclusive.
pub fn filter_by_position(table: &mut MethylationTable, kind: PositionKind, values: &[String]) {
    info!("filtering on {}(s) {values:?}", kind.name());

    table.retain_rows(|row, index| {
        let field = match kind {
            PositionKind::Chromosome => row.chromosome(index),
            PositionKind::Gene => row.gene(index),
        };
        values.iter().any(|value| field.eq_ignore_ascii_case(value))
    });

    info!("successfully filtered on {}, {} rows remain", kind.name(), table.n_rows());
}

/// Mask every beta value that fails the cutoff predicate with the missing
/// marker. Never removes rows or columns: the matrix keeps its shape, only
/// cells change.
pub fn filter_by_cutoff(table: &mut MethylationTable, cutoff: f64, direction: CutoffDirection) {
    info!("filtering on cutoff {cutoff} ({direction:?})");

    table.map_cells(|value| {
        let keep = match direction {
            CutoffDirection::Upper => value >= cutoff,
            CutoffDirection::Lower => value <= cutoff,
        };
        if keep { value } else { f64::NAN }
    });

    info!("successfully filtered on cutoff");
}

/// Remove every row that contains at least one missing value across the
/// currently retained samples.
pub fn remove_missing(table: &mut MethylationTable) {
    info!("removing rows with missing values");

    let before = table.n_rows();
    table.retain_rows(|row, _| !row.has_missing());

    info!("removed {} row(s) with missing values", before - table.n_rows());
}
