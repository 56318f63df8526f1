//! The fixed set of pairwise comparison methods and their dispatch.
//!
//! The comparison engine never calls a numeric routine directly: it goes
//! through [`StatMethod::apply`], so the routines stay swappable behind a
//! single seam. Method names are validated into the enum at the boundary,
//! before any comparison work starts.

use crate::error::{MethylError, Result};

pub mod nonparametric;
pub mod parametric;

/// One of the four supported comparison methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatMethod {
    /// Spearman rank correlation coefficient. Equal-length input.
    Spearman,
    /// Two-sided paired t-test p-value. Equal-length input.
    TTest,
    /// Wilcoxon signed-rank statistic W+. Equal-length input, rejects an
    /// empty effective sample after zero differences are dropped.
    Wilcoxon,
    /// Two-sided Welch t-test p-value. Tolerates unequal lengths and
    /// unequal variances.
    Welch,
}

impl StatMethod {
    /// Parse a method by its user-facing name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "spearman" => Ok(StatMethod::Spearman),
            "t-test" => Ok(StatMethod::TTest),
            "wilcoxon-test" => Ok(StatMethod::Wilcoxon),
            "welch-test" => Ok(StatMethod::Welch),
            other => Err(MethylError::UnknownMethod(other.to_string())),
        }
    }

    /// Parse a list of method names, failing on the first unknown one.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> Result<Vec<Self>> {
        names.iter().map(|name| Self::parse(name.as_ref())).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatMethod::Spearman => "spearman",
            StatMethod::TTest => "t-test",
            StatMethod::Wilcoxon => "wilcoxon-test",
            StatMethod::Welch => "welch-test",
        }
    }

    /// Whether this method requires both input vectors to have the same
    /// length. Only the Welch test does not.
    pub fn requires_equal_len(&self) -> bool {
        !matches!(self, StatMethod::Welch)
    }

    /// Run this method on two vectors and return its single numeric outcome.
    pub fn apply(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        if self.requires_equal_len() && x.len() != y.len() {
            return Err(MethylError::UnequalLengths {
                left: x.len(),
                right: y.len(),
            });
        }
        match self {
            StatMethod::Spearman => nonparametric::spearman(x, y),
            StatMethod::TTest => parametric::paired_t_test(x, y),
            StatMethod::Wilcoxon => nonparametric::wilcoxon_signed_rank(x, y),
            StatMethod::Welch => parametric::welch_t_test(x, y),
        }
    }
}

impl std::fmt::Display for StatMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
