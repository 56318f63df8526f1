use crate::error::{MethylError, Result};
use crate::methods::StatMethod;

/// Result table of a pairwise comparison run.
///
/// Holds the requested methods in caller order, one label per successfully
/// compared pair, and per method one outcome vector parallel to the label
/// vector. Labels and outcomes grow in lock-step: a writer can rely on every
/// method having exactly one value per label.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    methods: Vec<StatMethod>,
    pair_labels: Vec<String>,
    outcomes: Vec<Vec<f64>>,
}

impl ComparisonResult {
    pub fn new(methods: &[StatMethod]) -> Self {
        ComparisonResult {
            methods: methods.to_vec(),
            pair_labels: Vec::new(),
            outcomes: vec![Vec::new(); methods.len()],
        }
    }

    /// Append one compared pair: its label plus one outcome per method, in
    /// the method order this result was created with.
    ///
    /// A value count that does not match the method count is rejected before
    /// anything is appended, keeping labels and outcomes in lock-step.
    pub fn push_pair(&mut self, label: String, values: Vec<f64>) -> Result<()> {
        if values.len() != self.methods.len() {
            return Err(MethylError::OutcomeCountMismatch {
                expected: self.methods.len(),
                found: values.len(),
            });
        }
        self.pair_labels.push(label);
        for (column, value) in self.outcomes.iter_mut().zip(values) {
            column.push(value);
        }
        Ok(())
    }

    pub fn methods(&self) -> &[StatMethod] {
        &self.methods
    }

    pub fn pair_labels(&self) -> &[String] {
        &self.pair_labels
    }

    /// Outcome vector for one method, parallel to [`pair_labels`].
    ///
    /// [`pair_labels`]: ComparisonResult::pair_labels
    pub fn outcomes(&self, method: StatMethod) -> Option<&[f64]> {
        self.methods
            .iter()
            .position(|m| *m == method)
            .map(|i| self.outcomes[i].as_slice())
    }

    pub fn n_pairs(&self) -> usize {
        self.pair_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pair_labels.is_empty()
    }

    /// Iterate rows: each label with its outcomes in method order.
    pub fn iter_rows(&self) -> impl Iterator<Item = (&str, Vec<f64>)> {
        self.pair_labels.iter().enumerate().map(|(i, label)| {
            let row: Vec<f64> = self.outcomes.iter().map(|column| column[i]).collect();
            (label.as_str(), row)
        })
    }
}
