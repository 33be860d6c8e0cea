use std::io::BufRead;
use std::path::Path;

use log::{debug, info};

use manta_core::Result;
use manta_core::is_valid_snv;
use manta_core::models::{UNKNOWN_ALLELE, UNKNOWN_ID, Variant, VariantFileFormat};
use manta_core::utils::{get_dynamic_reader, strip_chr_prefix};

use crate::consts::*;
use crate::{LossyLines, split_columns};

///
/// Variants decoded from an input file along with any problems found on the way.
///
/// A malformed line ends parsing: `variants` then holds everything read before it and
/// `errors` one message describing the line. Records that merely don't look like SNVs are
/// dropped without a message.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    pub variants: Vec<Variant>,
    pub errors: Vec<String>,
}

impl ParseResult {
    fn abort(mut self, error: impl Into<String>) -> Self {
        self.errors.push(error.into());
        self
    }
}

///
/// Read the variants of a file in the given format.
///
/// # Arguments
/// - path: path to the variant file, possibly gzip'd
/// - file_format: layout of the file
pub fn read_variants_file(path: &Path, file_format: VariantFileFormat) -> Result<ParseResult> {
    info!("Reading variants file {} of type {}", path.display(), file_format);

    let reader = get_dynamic_reader(path)?;
    let result = read_variants(reader, file_format)?;

    info!(
        "Read {} variants from {} ({} problems)",
        result.variants.len(),
        path.display(),
        result.errors.len()
    );

    Ok(result)
}

///
/// Read the variants of a file whose format is given as a free text label, as submitted by
/// a user.
///
/// An unknown label isn't an error of the call: it gives no variants and one message.
pub fn read_variants_file_by_label(path: &Path, label: &str) -> Result<ParseResult> {
    match label.parse::<VariantFileFormat>() {
        Ok(file_format) => read_variants_file(path, file_format),
        Err(e) => Ok(ParseResult::default().abort(e.to_string())),
    }
}

///
/// Read variants in the given format from any reader.
pub fn read_variants<R: BufRead>(reader: R, file_format: VariantFileFormat) -> Result<ParseResult> {
    let mut result = ParseResult::default();

    for (idx, line) in LossyLines::new(reader).enumerate() {
        let line = line?;
        let line_num = idx + 1;

        if line.starts_with('#') {
            continue;
        }

        let line = line.trim_end();

        let parsed = match file_format {
            VariantFileFormat::Vcf => parse_vcf_line(line, line_num),
            VariantFileFormat::Gff => parse_gff_line(line, line_num),
            VariantFileFormat::Bed => parse_bed_line(line, line_num),
            VariantFileFormat::Simple => parse_simple_line(line, line_num),
        };

        match parsed {
            Ok(Some(variant)) => result.variants.push(variant),
            Ok(None) => {}
            Err(error) => {
                debug!("Stopped reading variants at line {}: {}", line_num, error);
                return Ok(result.abort(error));
            }
        }
    }

    Ok(result)
}

/// A line either gives a variant, is skipped (`None`), or ends parsing with a message.
type LineResult = std::result::Result<Option<Variant>, String>;

fn parse_position(val: &str, line_num: usize) -> std::result::Result<u64, String> {
    val.trim()
        .parse::<u64>()
        .map_err(|_| format!("Invalid position '{}' at line {}", val, line_num))
}

fn parse_vcf_line(line: &str, line_num: usize) -> LineResult {
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() < MIN_VCF_COLUMNS {
        return Err(VCF_COLUMNS_ERR.to_string());
    }

    let (chrom, position, id, ref_allele, alt_allele) = (cols[0], cols[1], cols[2], cols[3], cols[4]);

    if !is_valid_snv(ref_allele, alt_allele) {
        return Ok(None);
    }

    Ok(Some(Variant {
        id: id.to_string(),
        chrom: strip_chr_prefix(chrom).to_string(),
        position: parse_position(position, line_num)?,
        ref_allele: ref_allele.to_string(),
        alt_allele: alt_allele.to_string(),
    }))
}

fn parse_gff_line(line: &str, line_num: usize) -> LineResult {
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() != GFF_COLUMNS {
        return Err(GFF_COLUMNS_ERR.to_string());
    }

    let (chrom, start, end, attributes) = (cols[0], cols[3], cols[4], cols[8]);

    // anything spanning more than one base is an indel
    if start != end {
        return Ok(None);
    }

    // only reachable for callers that don't trim lines, an empty last column is trimmed away
    if attributes.is_empty() {
        return Err(format!(
            "GFF file has blank attributes field at line {}",
            line_num
        ));
    }

    let mut ref_allele = None;
    let mut alt_allele = None;
    for (name, val) in attributes.split("; ").filter_map(|attr| attr.split_once('=')) {
        if GFF_REF_ALLELE_KEYS.contains(&name) {
            ref_allele = Some(val);
        }
        if GFF_ALT_ALLELE_KEYS.contains(&name) {
            alt_allele = Some(val);
        }
    }

    let (Some(ref_allele), Some(alt_allele)) = (
        ref_allele.filter(|a| !a.is_empty()),
        alt_allele.filter(|a| !a.is_empty()),
    ) else {
        return Err(format!(
            "GFF attributes field contains no ref_allele or alt_allele information at line {}",
            line_num
        ));
    };

    if !is_valid_snv(ref_allele, alt_allele) {
        return Ok(None);
    }

    // TODO: reverse complement the alleles of minus strand records once it is settled whether
    // submitted GFF alleles are given on the feature strand
    Ok(Some(Variant {
        id: UNKNOWN_ID.to_string(),
        chrom: strip_chr_prefix(chrom).to_string(),
        position: parse_position(start, line_num)?,
        ref_allele: ref_allele.to_string(),
        alt_allele: alt_allele.to_string(),
    }))
}

fn parse_bed_line(line: &str, line_num: usize) -> LineResult {
    let cols = split_columns(line, MIN_BED_COLUMNS);
    if cols.len() < MIN_BED_COLUMNS {
        return Err(BED_COLUMNS_ERR.to_string());
    }

    let chrom = cols[0];
    let start = parse_position(cols[1], line_num)?;
    let end = parse_position(cols[2], line_num)?;
    // BED has no allele columns, the name field is taken as the alternate allele
    let alt_allele = cols[3];

    // start < end - 1: longer than a single base, so an indel
    if start.saturating_add(1) < end {
        return Ok(None);
    }

    if !is_valid_snv(UNKNOWN_ALLELE, alt_allele) {
        return Ok(None);
    }

    // the 0-based half open interval [start, end) ends on the 1-based position
    Ok(Some(Variant {
        id: UNKNOWN_ID.to_string(),
        chrom: strip_chr_prefix(chrom).to_string(),
        position: end,
        ref_allele: UNKNOWN_ALLELE.to_string(),
        alt_allele: alt_allele.to_string(),
    }))
}

fn parse_simple_line(line: &str, line_num: usize) -> LineResult {
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() < MIN_SIMPLE_COLUMNS {
        return Err(SIMPLE_COLUMNS_ERR.to_string());
    }

    Ok(Some(Variant {
        id: UNKNOWN_ID.to_string(),
        chrom: strip_chr_prefix(cols[0]).to_string(),
        position: parse_position(cols[1], line_num)?,
        ref_allele: cols[2].to_string(),
        alt_allele: cols[3].to_string(),
    }))
}
