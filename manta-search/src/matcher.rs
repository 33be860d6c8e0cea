use log::{debug, info};

use manta_core::models::{SnvImpact, TfbsSnv, UNKNOWN_ALLELE, Variant};

use crate::store::TfbsStore;

///
/// Impacts found for a list of variants, and the warnings raised while matching them.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub snv_impacts: Vec<SnvImpact>,
    pub warnings: Vec<String>,
}

///
/// Search the store for binding sites impacted at the position of each variant.
///
/// The store's reference allele is taken to be right. A variant without a reference allele
/// (read from BED) takes the store's, and a variant whose reference allele disagrees with the
/// store gets a warning and the store's allele from then on. Sites that have no impact
/// computed for the variant's alternate allele are reported as warnings.
///
/// Neither the store nor the variants are changed.
///
/// # Arguments
/// - store: the binding-site database
/// - variants: the variants to search for
pub fn search_variants<S>(store: &S, variants: &[Variant]) -> SearchResult
where
    S: TfbsStore + ?Sized,
{
    let mut result = SearchResult::default();

    for variant in variants {
        search_variant(store, variant, &mut result);
    }

    info!(
        "Found {} TFBS impacts for {} variants ({} warnings)",
        result.snv_impacts.len(),
        variants.len(),
        result.warnings.len()
    );

    result
}

fn search_variant<S>(store: &S, variant: &Variant, result: &mut SearchResult)
where
    S: TfbsStore + ?Sized,
{
    let chrom = &variant.chrom;
    let position = variant.position;
    let alt_allele = &variant.alt_allele;
    // resolved against the store, carried over from one site to the next
    let mut ref_allele = variant.ref_allele.clone();

    for site in store.find_by_chrom_and_position(chrom, position) {
        for snv in site.snvs.iter().filter(|snv| snv.pos == position) {
            if ref_allele == UNKNOWN_ALLELE {
                ref_allele = snv.ref_allele.clone();
            }

            if snv.ref_allele != ref_allele {
                let warning = ref_mismatch_warning(site, variant, &ref_allele, &snv.ref_allele);
                debug!("{}", warning);
                result.warnings.push(warning);

                ref_allele = snv.ref_allele.clone();
            }

            match snv.impact_for(alt_allele) {
                Some(impact) => {
                    result
                        .snv_impacts
                        .push(SnvImpact::new(variant, &ref_allele, site, impact));
                    break;
                }
                None => {
                    let warning = missing_allele_warning(site, variant);
                    debug!("{}", warning);
                    result.warnings.push(warning);
                }
            }
        }
    }
}

fn ref_mismatch_warning(site: &TfbsSnv, variant: &Variant, given: &str, recorded: &str) -> String {
    format!(
        "WARNING: Reference allele mismatch at location chr{chrom}:{pos} affecting transcription \
         factor {tf} ({matrix}) binding site chr{chrom}:{start}-{end}! The input SNV reference \
         allele was given as '{given}' but the MANTA2 database records it as '{recorded}'. The \
         MANTA2 database reference allele is assumed to be correct.",
        chrom = variant.chrom,
        pos = variant.position,
        tf = site.jaspar_tf_name,
        matrix = site.matrix_id,
        start = site.start,
        end = site.end,
        given = given,
        recorded = recorded,
    )
}

fn missing_allele_warning(site: &TfbsSnv, variant: &Variant) -> String {
    format!(
        "WARNING: Variant allele {alt} at location chr{chrom}:{pos} affecting transcription \
         factor {tf} ({matrix}) binding site chr{chrom}:{start}-{end} was NOT found - ignoring!",
        alt = variant.alt_allele,
        chrom = variant.chrom,
        pos = variant.position,
        tf = site.jaspar_tf_name,
        matrix = site.matrix_id,
        start = site.start,
        end = site.end,
    )
}
