//! Validity checks for the user-requested filter arguments.
//!
//! Each filter dimension has its own check, kept independent of the others;
//! a [`CompositeCheck`] gates the whole pipeline by running the requested
//! checks in order and stopping at the first failure, so no filtering runs
//! on partially validated arguments.

use log::{debug, info};

use crate::error::{MethylError, Result};
use crate::model::MethylationTable;

/// Largest number of genes a single filter request may name.
pub const MAX_GENES: usize = 30;

const CHROMOSOME_MIN: i64 = 1;
const CHROMOSOME_MAX: i64 = 23;

/// One validity check, tagged by filter dimension. The dimension set is
/// closed and small, so the variants are spelled out rather than hidden
/// behind an open-ended trait object.
#[derive(Debug, Clone)]
pub enum ArgumentCheck<'a> {
    /// Each token must be X/Y (case-insensitive) or an integer in [1, 23].
    Chromosome(&'a [String]),
    /// At most [`MAX_GENES`] tokens, each present (case-insensitive) among
    /// the genes observed in the data.
    Gene(&'a [String], &'a MethylationTable),
    /// Each name must exist in the current sample list.
    Sample(&'a [String], &'a MethylationTable),
    /// The cutoff must lie within the beta-value range [0.0, 1.0].
    Cutoff(f64),
}

impl ArgumentCheck<'_> {
    /// Run this check, returning the error of the first offending argument.
    pub fn pass(&self) -> Result<()> {
        match self {
            ArgumentCheck::Chromosome(tokens) => check_chromosomes(tokens),
            ArgumentCheck::Gene(tokens, table) => check_genes(tokens, table),
            ArgumentCheck::Sample(names, table) => check_samples(names, table),
            ArgumentCheck::Cutoff(cutoff) => check_cutoff(*cutoff),
        }
    }

    fn dimension(&self) -> &'static str {
        match self {
            ArgumentCheck::Chromosome(_) => "chromosome",
            ArgumentCheck::Gene(_, _) => "gene",
            ArgumentCheck::Sample(_, _) => "sample",
            ArgumentCheck::Cutoff(_) => "cutoff",
        }
    }
}

/// Runs a configured list of checks in order, short-circuiting on the first
/// failure. Built from only the dimensions the caller actually requested.
#[derive(Debug, Default)]
pub struct CompositeCheck<'a> {
    checks: Vec<ArgumentCheck<'a>>,
}

impl<'a> CompositeCheck<'a> {
    pub fn new() -> Self {
        CompositeCheck { checks: Vec::new() }
    }

    pub fn add(&mut self, check: ArgumentCheck<'a>) -> &mut Self {
        self.checks.push(check);
        self
    }

    /// Run every configured check in insertion order; later checks are never
    /// run once one fails.
    pub fn pass_all(&self) -> Result<()> {
        for check in &self.checks {
            info!("starting validity check for {} filter", check.dimension());
            check.pass()?;
            info!("passed validity check for {} filter", check.dimension());
        }
        Ok(())
    }
}

fn check_chromosomes(tokens: &[String]) -> Result<()> {
    for token in tokens {
        debug!("validity check for chromosome '{token}'");

        // X and Y are valid chromosomes alongside the numbered ones.
        if token.eq_ignore_ascii_case("X") || token.eq_ignore_ascii_case("Y") {
            continue;
        }

        match token.parse::<i64>() {
            Ok(number) if (CHROMOSOME_MIN..=CHROMOSOME_MAX).contains(&number) => {}
            _ => return Err(MethylError::InvalidChromosome(token.clone())),
        }
    }
    Ok(())
}

fn check_genes(tokens: &[String], table: &MethylationTable) -> Result<()> {
    if tokens.len() > MAX_GENES {
        return Err(MethylError::TooManyGenes {
            count: tokens.len(),
            max: MAX_GENES,
        });
    }

    let observed = table.genes();
    for token in tokens {
        debug!("validity check for gene '{token}'");
        let present = observed
            .iter()
            .any(|gene| gene.eq_ignore_ascii_case(token));
        if !present {
            return Err(MethylError::UnknownGene(token.clone()));
        }
    }
    Ok(())
}

fn check_samples(names: &[String], table: &MethylationTable) -> Result<()> {
    for name in names {
        debug!("validity check for sample '{name}'");
        if table.sample_position(name).is_none() {
            return Err(MethylError::UnknownSample(name.clone()));
        }
    }
    Ok(())
}

fn check_cutoff(cutoff: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&cutoff) {
        return Err(MethylError::InvalidCutoff(cutoff));
    }
    Ok(())
}
