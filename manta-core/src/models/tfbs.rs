use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// The predicted binding site for one alternate allele at one position of a TFBS.
///
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Impact {
    pub start: u64,
    pub end: u64,
    pub strand: String,
    pub abs_score: f64,
    pub rel_score: f64,
    pub impact: f64,
}

///
/// One scored position inside a binding site: the reference allele recorded there and the
/// [Impact] of every alternate allele, keyed by the allele letter.
///
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnvEntry {
    pub pos: u64,
    pub ref_allele: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub impacts: BTreeMap<String, Impact>,
}

impl SnvEntry {
    ///
    /// Get the impact of an alternate allele at this position, if one was computed.
    ///
    pub fn impact_for(&self, alt_allele: &str) -> Option<&Impact> {
        self.impacts.get(alt_allele)
    }
}

///
/// A binding site of one transcription factor along with every scored SNV position in it.
///
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TfbsSnv {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub strand: String,
    pub abs_score: f64,
    pub rel_score: f64,
    pub matrix_id: String,
    pub jaspar_tf_name: String,
    pub snvs: Vec<SnvEntry>,
}

impl TfbsSnv {
    ///
    /// Does this site hold a scored entry at `position`?
    ///
    pub fn has_position(&self, position: u64) -> bool {
        self.snvs.iter().any(|snv| snv.pos == position)
    }
}
