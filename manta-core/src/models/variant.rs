#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placeholder for an allele the input format can't express (BED has no reference column).
pub const UNKNOWN_ALLELE: &str = ".";

/// Placeholder for a variant without an identifier.
pub const UNKNOWN_ID: &str = ".";

///
/// A single-nucleotide variant read from an input file.
///
/// `chrom` never carries the leading `chr`, and `position` is 1-based.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variant {
    pub id: String,
    pub chrom: String,
    pub position: u64,
    pub ref_allele: String,
    pub alt_allele: String,
}

impl Variant {
    ///
    /// Does this variant carry a real reference allele, as opposed to the sentinel?
    ///
    pub fn has_known_ref(&self) -> bool {
        self.ref_allele != UNKNOWN_ALLELE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn test_known_ref() {
        let mut variant = Variant {
            id: UNKNOWN_ID.to_string(),
            chrom: "1".to_string(),
            position: 100,
            ref_allele: "A".to_string(),
            alt_allele: "G".to_string(),
        };
        assert!(variant.has_known_ref());

        variant.ref_allele = UNKNOWN_ALLELE.to_string();
        assert!(!variant.has_known_ref());
    }
}
