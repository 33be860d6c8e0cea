use crate::models::UNKNOWN_ALLELE;

/// Nucleotide codes accepted for a reference allele.
pub const REF_ALLELE_CODES: &[char] = &['A', 'C', 'G', 'T', 'N', 'a', 'c', 'g', 't', 'n'];

/// Nucleotide codes accepted for an alternate allele.
pub const ALT_ALLELE_CODES: &[char] = &['A', 'C', 'G', 'T', 'a', 'c', 'g', 't'];

///
/// Check that a (ref, alt) allele pair describes a single-nucleotide substitution.
///
/// The reference allele may also be the sentinel `"."`, used by formats that can't
/// express it (BED).
///
/// # Arguments
/// - ref_allele: reference allele
/// - alt_allele: alternate allele
pub fn is_valid_snv(ref_allele: &str, alt_allele: &str) -> bool {
    let (Some(r), Some(a)) = (single_char(ref_allele), single_char(alt_allele)) else {
        return false;
    };

    if r.eq_ignore_ascii_case(&a) {
        return false;
    }

    if !(REF_ALLELE_CODES.contains(&r) || ref_allele == UNKNOWN_ALLELE) {
        return false;
    }

    ALT_ALLELE_CODES.contains(&a)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
