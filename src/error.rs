use thiserror::Error;

/// Error kinds surfaced by the loading, validation, filtering and comparison
/// pipeline. Every variant carries the offending token or value so callers can
/// report exactly what was rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MethylError {
    /// The input had no header line (or only a blank one).
    #[error("input is empty, expected a header line with location fields and sample names")]
    EmptyInput,

    /// A required semantic key was absent from the header line.
    #[error("'{key}' not found in header, invalid header")]
    MalformedHeader { key: &'static str },

    /// A semantic key resolved to a column among the sample columns, so the
    /// caller-supplied sample start does not cover the location prefix.
    #[error(
        "'{key}' column {position} lies outside the location prefix, \
         sample columns start at {sample_start}; check the sample start index"
    )]
    MisplacedHeaderKey {
        key: &'static str,
        position: usize,
        sample_start: usize,
    },

    /// A beta-value cell was neither numeric nor the NA marker.
    #[error("invalid beta value: '{value}', expected a number or 'NA'")]
    MalformedBetaValue { value: String },

    /// A row carried a different number of beta values than there are samples.
    #[error("number of beta values ({found}) does not match number of samples ({expected})")]
    SampleCountMismatch { expected: usize, found: usize },

    /// A chromosome token was neither X/Y nor an integer in [1, 23].
    #[error("invalid chromosome: '{0}', must be 1-23 or X/Y")]
    InvalidChromosome(String),

    /// A requested gene does not occur anywhere in the loaded data.
    #[error("gene '{0}' is not present in the data")]
    UnknownGene(String),

    /// More genes were requested than the guard-rail allows.
    #[error("{count} genes requested, at most {max} are allowed")]
    TooManyGenes { count: usize, max: usize },

    /// A requested sample name is not in the current sample list.
    #[error("sample '{0}' is not present in the data")]
    UnknownSample(String),

    /// The cutoff lies outside the valid beta-value range.
    #[error("cutoff {0} is out of bounds, must lie within [0.0, 1.0]")]
    InvalidCutoff(f64),

    /// Vectors of unequal length were paired with a method that requires
    /// equal-length input. Only the Welch test tolerates this.
    #[error(
        "compared vectors have unequal lengths ({left} vs {right}) and a requested method \
         requires equal sample sizes, use welch-test to work around this"
    )]
    UnequalLengths { left: usize, right: usize },

    /// A method name did not match any known statistical test.
    #[error("unknown statistical method: '{0}'")]
    UnknownMethod(String),

    /// A comparison-result row carried a different number of outcomes than
    /// there are methods.
    #[error("number of outcomes ({found}) does not match number of methods ({expected})")]
    OutcomeCountMismatch { expected: usize, found: usize },

    /// A statistical routine rejected its input as too small.
    #[error("too few usable observations for {method}: {found}")]
    TooFewObservations { method: &'static str, found: usize },
}

pub type Result<T> = std::result::Result<T, MethylError>;
