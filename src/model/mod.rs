//! In-memory model for a methylation array file: the table aggregate, its
//! rows, the header index resolver and the comparison result table.

use log::debug;

use crate::error::{MethylError, Result};

pub mod comparison;
pub mod index;

pub use comparison::ComparisonResult;
pub use index::HeaderIndex;

/// One probe/region row: the location fields (id, gene, chromosome,
/// coordinates, ...) plus one beta value per sample. A missing measurement is
/// carried as `f64::NAN`, never as an ordinary value.
#[derive(Debug, Clone, PartialEq)]
pub struct MethylationRow {
    location: Vec<String>,
    beta_values: Vec<f64>,
}

impl MethylationRow {
    pub fn location(&self) -> &[String] {
        &self.location
    }

    pub fn beta_values(&self) -> &[f64] {
        &self.beta_values
    }

    /// Chromosome token of this row, looked up through the header index.
    pub fn chromosome(&self, index: &HeaderIndex) -> &str {
        self.location[index.chromosome_index()].trim()
    }

    /// Gene name of this row, looked up through the header index.
    pub fn gene(&self, index: &HeaderIndex) -> &str {
        self.location[index.gene_index()].trim()
    }

    pub fn has_missing(&self) -> bool {
        self.beta_values.iter().any(|v| v.is_nan())
    }
}

/// The aggregate holding one parsed methylation array file: the ordered
/// sample list, the probe rows, the non-sample header prefix and the resolved
/// header index.
///
/// Rows only enter through [`MethylationTable::push_row`], which enforces the
/// core invariant that every row carries exactly one beta value per sample.
/// All filtering operations transform this aggregate in place by rebuilding
/// the affected vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct MethylationTable {
    samples: Vec<String>,
    rows: Vec<MethylationRow>,
    header_prefix: Vec<String>,
    index: HeaderIndex,
}

impl MethylationTable {
    /// Create an empty table for the given header prefix and sample list.
    pub fn new(header_prefix: Vec<String>, samples: Vec<String>, index: HeaderIndex) -> Self {
        MethylationTable {
            samples,
            rows: Vec::new(),
            header_prefix,
            index,
        }
    }

    /// Parse a whole file into a table.
    ///
    /// The caller supplies `sample_start`: the column at which the sample
    /// columns begin, since the width of the location prefix is not fixed
    /// across input files. Cells equal to `NA` (case-insensitive) become the
    /// NaN missing marker; any other non-numeric cell fails the load.
    ///
    /// # Arguments
    ///
    /// * `header_line` - The first line of the file
    /// * `data_lines` - All remaining lines, one probe/region per line
    /// * `sample_start` - Zero-based index of the first sample column
    pub fn from_lines<S: AsRef<str>>(
        header_line: &str,
        data_lines: &[S],
        sample_start: usize,
    ) -> Result<Self> {
        if header_line.trim().is_empty() {
            return Err(MethylError::EmptyInput);
        }

        let header_fields: Vec<&str> = header_line.split(',').collect();
        let index = HeaderIndex::resolve(&header_fields)?;
        index.ensure_within_prefix(sample_start)?;

        let header_prefix: Vec<String> = header_fields
            .iter()
            .take(sample_start)
            .map(|field| field.trim().to_string())
            .collect();
        let samples: Vec<String> = header_fields
            .iter()
            .skip(sample_start)
            .map(|field| field.trim().to_string())
            .collect();

        debug!(
            "parsed header: {} location fields, {} samples",
            header_prefix.len(),
            samples.len()
        );

        let mut table = MethylationTable::new(header_prefix, samples, index);
        for line in data_lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            let location: Vec<String> = fields
                .iter()
                .take(sample_start)
                .map(|field| field.trim().to_string())
                .collect();
            let beta_values = parse_beta_values(&fields[sample_start.min(fields.len())..])?;
            table.push_row(location, beta_values)?;
        }

        Ok(table)
    }

    /// Append one row, enforcing the beta-value/sample count invariant.
    pub fn push_row(&mut self, location: Vec<String>, beta_values: Vec<f64>) -> Result<()> {
        if beta_values.len() != self.samples.len() {
            return Err(MethylError::SampleCountMismatch {
                expected: self.samples.len(),
                found: beta_values.len(),
            });
        }
        self.rows.push(MethylationRow {
            location,
            beta_values,
        });
        Ok(())
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn rows(&self) -> &[MethylationRow] {
        &self.rows
    }

    pub fn header_prefix(&self) -> &[String] {
        &self.header_prefix
    }

    pub fn index(&self) -> &HeaderIndex {
        &self.index
    }

    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Position of a sample name in the current sample list.
    pub fn sample_position(&self, name: &str) -> Option<usize> {
        self.samples.iter().position(|s| s == name)
    }

    /// All gene names observed in the data, in row order, duplicates kept.
    pub fn genes(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.gene(&self.index)).collect()
    }

    /// The column of beta values for one sample, across all rows.
    pub fn sample_beta_values(&self, column: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row.beta_values[column]).collect()
    }

    /// All beta values of rows whose chromosome or gene matches `token`
    /// (case-insensitive), flattened across the retained samples.
    pub fn position_beta_values(&self, kind: PositionKind, token: &str) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|row| {
                let value = match kind {
                    PositionKind::Chromosome => row.chromosome(&self.index),
                    PositionKind::Gene => row.gene(&self.index),
                };
                value.eq_ignore_ascii_case(token)
            })
            .flat_map(|row| row.beta_values.iter().copied())
            .collect()
    }

    /// Replace the sample list and every row's beta values at once. Used by
    /// the filtering engine; the invariant is re-checked per row.
    pub(crate) fn replace_columns(
        &mut self,
        samples: Vec<String>,
        per_row_values: Vec<Vec<f64>>,
    ) -> Result<()> {
        debug_assert_eq!(per_row_values.len(), self.rows.len());
        for values in &per_row_values {
            if values.len() != samples.len() {
                return Err(MethylError::SampleCountMismatch {
                    expected: samples.len(),
                    found: values.len(),
                });
            }
        }
        self.samples = samples;
        for (row, values) in self.rows.iter_mut().zip(per_row_values) {
            row.beta_values = values;
        }
        Ok(())
    }

    /// Keep only the rows for which `keep` returns true, preserving order.
    pub(crate) fn retain_rows(&mut self, keep: impl Fn(&MethylationRow, &HeaderIndex) -> bool) {
        let index = self.index;
        self.rows.retain(|row| keep(row, &index));
    }

    /// Rewrite every row's beta values through `map`, keeping matrix shape.
    pub(crate) fn map_cells(&mut self, map: impl Fn(f64) -> f64) {
        for row in &mut self.rows {
            for value in &mut row.beta_values {
                *value = map(*value);
            }
        }
    }
}

/// Which location field a positional filter or region comparison targets.
/// Chromosome and gene filtering are mutually exclusive per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionKind {
    Chromosome,
    Gene,
}

impl PositionKind {
    pub fn name(&self) -> &'static str {
        match self {
            PositionKind::Chromosome => "chromosome",
            PositionKind::Gene => "gene",
        }
    }
}

fn parse_beta_values(cells: &[&str]) -> Result<Vec<f64>> {
    cells
        .iter()
        .map(|cell| {
            let cell = cell.trim();
            if cell.eq_ignore_ascii_case("na") {
                return Ok(f64::NAN);
            }
            cell.parse::<f64>()
                .map_err(|_| MethylError::MalformedBetaValue {
                    value: cell.to_string(),
                })
        })
        .collect()
}
