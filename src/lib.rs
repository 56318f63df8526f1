//! # methyl-statistics
//!
//! A Rust library for filtering and pairwise statistical comparison of DNA
//! methylation array data.
//!
//! The crate parses a tabular file of beta values (one row per genomic
//! probe/region, one column per biological sample) into an in-memory
//! [`model::MethylationTable`], lets the caller narrow it along independent,
//! individually validated dimensions (samples, chromosome, gene, beta-value
//! cutoff), and compares samples or genomic regions pairwise with a small
//! fixed set of classical statistical tests.
//!
//! ## Core Features
//!
//! - **Filtering**: sample subsetting, chromosome/gene row selection,
//!   cutoff masking and missing-value removal, composable in a fixed order
//! - **Validation**: per-dimension argument checks gated by a composite
//!   check, so no filtering runs on invalid arguments
//! - **Pairwise Comparison**: Spearman correlation, paired t-test, Wilcoxon
//!   signed-rank and Welch's t-test over all unordered pairs of samples or
//!   regions
//!
//! ## Module Organization
//!
//! - **[`model`]**: the table aggregate, header index resolver and
//!   comparison result table
//! - **[`validation`]**: argument checks and the composite gate
//! - **[`filtering`]**: the four filter transformations
//! - **[`methods`]**: the statistical method set and its dispatch
//! - **[`comparing`]**: the sample and region pairwise comparers
//! - **[`summary`]**, **[`render`]**: file summary and CSV text output

pub mod comparing;
pub mod error;
pub mod filtering;
pub mod methods;
pub mod model;
pub mod render;
pub mod summary;
pub mod validation;

pub use error::{MethylError, Result};
pub use methods::StatMethod;
pub use model::{ComparisonResult, MethylationTable, PositionKind};
