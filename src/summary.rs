//! Short per-file summary of a loaded table.

use log::info;

use crate::model::MethylationTable;

/// Headline numbers for one input file: sample and row counts, the mean of
/// all measured beta values, and how many cells are missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub n_samples: usize,
    pub n_rows: usize,
    pub mean_beta: f64,
    pub n_missing: usize,
}

impl Summary {
    pub fn from_table(table: &MethylationTable) -> Self {
        info!("generating summary");

        let mut sum = 0.0;
        let mut n_measured = 0usize;
        let mut n_missing = 0usize;
        for row in table.rows() {
            for &value in row.beta_values() {
                if value.is_nan() {
                    n_missing += 1;
                } else {
                    sum += value;
                    n_measured += 1;
                }
            }
        }

        let mean_beta = if n_measured > 0 {
            sum / n_measured as f64
        } else {
            f64::NAN
        };

        Summary {
            n_samples: table.n_samples(),
            n_rows: table.n_rows(),
            mean_beta,
            n_missing,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number of samples: {}", self.n_samples)?;
        writeln!(f, "Number of rows: {}", self.n_rows)?;
        writeln!(f, "Avg beta value: {:.2}", self.mean_beta)?;
        write!(f, "Amount of missing values: {}", self.n_missing)
    }
}
