use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::models::{Impact, TfbsSnv, Variant};

///
/// The impact of one variant on one binding site.
///
/// The `*1` fields describe the binding site as found in the reference genome, the `*2`
/// fields the predicted binding site once the alternate allele is substituted in.
///
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnvImpact {
    pub snv_id: String,
    pub chrom: String,
    pub position: u64,
    pub ref_allele: String,
    pub alt_allele: String,
    pub matrix_id: String,
    pub jaspar_tf_name: String,
    pub start1: u64,
    pub end1: u64,
    pub strand1: String,
    pub abs_score1: f64,
    pub rel_score1: f64,
    pub start2: u64,
    pub end2: u64,
    pub strand2: String,
    pub abs_score2: f64,
    pub rel_score2: f64,
    pub impact: f64,
}

impl SnvImpact {
    ///
    /// Combine a variant, its resolved reference allele, the binding site it falls in and the
    /// matching [Impact] into one record.
    ///
    pub fn new(variant: &Variant, ref_allele: &str, site: &TfbsSnv, impact: &Impact) -> Self {
        SnvImpact {
            snv_id: variant.id.clone(),
            chrom: variant.chrom.clone(),
            position: variant.position,
            ref_allele: ref_allele.to_string(),
            alt_allele: variant.alt_allele.clone(),
            matrix_id: site.matrix_id.clone(),
            jaspar_tf_name: site.jaspar_tf_name.clone(),
            start1: site.start,
            end1: site.end,
            strand1: site.strand.clone(),
            abs_score1: site.abs_score,
            rel_score1: site.rel_score,
            start2: impact.start,
            end2: impact.end,
            strand2: impact.strand.clone(),
            abs_score2: impact.abs_score,
            rel_score2: impact.rel_score,
            impact: impact.impact,
        }
    }

    ///
    /// Get the tab separated report line of this impact (no trailing newline).
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chrom,
            self.position,
            self.ref_allele,
            self.alt_allele,
            self.snv_id,
            self.jaspar_tf_name,
            self.matrix_id,
            self.start1,
            self.end1,
            self.strand1,
            self.abs_score1,
            self.rel_score1,
            self.start2,
            self.end2,
            self.strand2,
            self.abs_score2,
            self.rel_score2,
            self.impact,
        )
    }
}

impl Display for SnvImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::models::SnvEntry;

    #[fixture]
    fn snv_impact() -> SnvImpact {
        let impact = Impact {
            start: 96,
            end: 106,
            strand: "-".to_string(),
            abs_score: 5.5,
            rel_score: 0.6,
            impact: -0.25,
        };
        let site = TfbsSnv {
            chrom: "1".to_string(),
            start: 95,
            end: 105,
            strand: "+".to_string(),
            abs_score: 9.25,
            rel_score: 0.85,
            matrix_id: "MA0139.1".to_string(),
            jaspar_tf_name: "CTCF".to_string(),
            snvs: vec![SnvEntry {
                pos: 100,
                ref_allele: "A".to_string(),
                impacts: BTreeMap::new(),
            }],
        };
        let variant = Variant {
            id: "rs1".to_string(),
            chrom: "1".to_string(),
            position: 100,
            ref_allele: "C".to_string(),
            alt_allele: "G".to_string(),
        };
        SnvImpact::new(&variant, "A", &site, &impact)
    }

    #[rstest]
    fn test_new_uses_resolved_ref(snv_impact: SnvImpact) {
        assert_eq!(snv_impact.ref_allele, "A");
        assert_eq!(snv_impact.alt_allele, "G");
        assert_eq!(snv_impact.start1, 95);
        assert_eq!(snv_impact.start2, 96);
    }

    #[rstest]
    fn test_as_string(snv_impact: SnvImpact) {
        let line = snv_impact.as_string();
        assert_eq!(
            line,
            "1\t100\tA\tG\trs1\tCTCF\tMA0139.1\t95\t105\t+\t9.25\t0.85\t96\t106\t-\t5.5\t0.6\t-0.25"
        );
        assert_eq!(line.split('\t').count(), 18);
        assert_eq!(snv_impact.to_string(), line);
    }
}
