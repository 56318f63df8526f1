use crate::error::{MethylError, Result};

const CHROMOSOME_KEY: &str = "chr";
const GENE_KEY: &str = "gene";

/// Column positions of the semantic location fields within a row's location
/// prefix. Input files do not guarantee a fixed column order, so these are
/// resolved once from the header line and carried by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderIndex {
    chromosome: usize,
    gene: usize,
}

impl HeaderIndex {
    /// Resolve the `chr` and `gene` columns from the header fields.
    ///
    /// Both keys are matched literally, in lowercase as methylation array
    /// headers spell them. Missing either key is a structural defect of the
    /// input file and fails the whole load.
    pub fn resolve(header_fields: &[&str]) -> Result<Self> {
        let find = |key: &'static str| -> Result<usize> {
            header_fields
                .iter()
                .position(|field| field.trim() == key)
                .ok_or(MethylError::MalformedHeader { key })
        };

        Ok(HeaderIndex {
            chromosome: find(CHROMOSOME_KEY)?,
            gene: find(GENE_KEY)?,
        })
    }

    /// Ensure both resolved columns lie inside the location prefix of width
    /// `sample_start`.
    ///
    /// Finding a key among the sample columns means the caller's sample start
    /// index is wrong for this file; a row lookup through such an index would
    /// reach past the location fields.
    pub fn ensure_within_prefix(&self, sample_start: usize) -> Result<()> {
        for (key, position) in [(CHROMOSOME_KEY, self.chromosome), (GENE_KEY, self.gene)] {
            if position >= sample_start {
                return Err(MethylError::MisplacedHeaderKey {
                    key,
                    position,
                    sample_start,
                });
            }
        }
        Ok(())
    }

    pub fn chromosome_index(&self) -> usize {
        self.chromosome
    }

    pub fn gene_index(&self) -> usize {
        self.gene
    }
}
