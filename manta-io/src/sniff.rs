use std::io::BufRead;
use std::path::Path;

use log::debug;

use manta_core::Result;
use manta_core::models::VariantFileFormat;
use manta_core::utils::{get_dynamic_reader, get_file_info, is_int};

use crate::consts::*;
use crate::{LossyLines, split_columns};

///
/// Outcome of guessing the format of a variant file.
///
/// `file_format` is `None` when the first data line matched no known layout; `errors` explains
/// why when the line was clearly malformed.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SniffResult {
    pub file_format: Option<VariantFileFormat>,
    pub errors: Vec<String>,
}

///
/// Try to determine the format of a variant file from the columns of its first data line and
/// its extension.
///
/// Only the first line that is neither blank nor a comment is looked at. A `##fileformat=VCF`
/// meta line settles the question before any data line is reached.
///
/// # Arguments
/// - path: path to the variant file, possibly gzip'd
pub fn determine_file_format(path: &Path) -> Result<SniffResult> {
    let extension = get_file_info(path).extension;
    let reader = get_dynamic_reader(path)?;

    let result = sniff_reader(reader, extension.as_deref())?;
    debug!(
        "Sniffed {} as {:?}",
        path.display(),
        result.file_format.map(|f| f.as_str())
    );

    Ok(result)
}

///
/// Sniff the format of variant lines coming from any reader.
///
/// # Arguments
/// - reader: the variant lines
/// - extension: lower-cased file extension without the dot, if known
pub fn sniff_reader<R: BufRead>(reader: R, extension: Option<&str>) -> Result<SniffResult> {
    for line in LossyLines::new(reader) {
        let line = line?;

        if line.starts_with('#') {
            if line.contains(VCF_FILEFORMAT_MARKER) {
                return Ok(SniffResult {
                    file_format: Some(VariantFileFormat::Vcf),
                    errors: vec![],
                });
            }
            continue;
        }

        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        return Ok(sniff_line(line, extension));
    }

    Ok(SniffResult::default())
}

///
/// Classify a single data line.
///
/// # Arguments
/// - line: the first data line, trailing whitespace removed
/// - extension: lower-cased file extension without the dot, if known
pub fn sniff_line(line: &str, extension: Option<&str>) -> SniffResult {
    let mut result = SniffResult::default();

    // VCF and GFF demand tabs, anything else might be a whitespace separated BED
    let cols: Vec<&str> = match extension {
        Some("vcf") | Some("gff") => line.split('\t').collect(),
        _ => split_columns(line, MIN_SNIFF_COLUMNS),
    };

    if cols.len() < MIN_SNIFF_COLUMNS {
        result.errors.push(TOO_FEW_COLUMNS_ERR.to_string());
        return result;
    }

    // both VCF and BED have an integer position in the 2nd column
    if !is_int(cols[1]) {
        if cols.len() >= GFF_COLUMNS {
            result.file_format = Some(VariantFileFormat::Gff);
        } else {
            result.errors.push(GFF_TOO_FEW_COLUMNS_ERR.to_string());
        }
        return result;
    }

    if is_int(cols[2]) {
        // an integer 3rd column is either a BED end or a numeric VCF ID
        if is_single_base_bed(&cols) {
            result.file_format = Some(VariantFileFormat::Bed);
        } else if looks_like_vcf(&cols) {
            result.file_format = Some(VariantFileFormat::Vcf);
        }
    } else if looks_like_vcf(&cols) {
        result.file_format = Some(VariantFileFormat::Vcf);
    }

    result
}

fn is_single_base_bed(cols: &[&str]) -> bool {
    let start = cols[1].trim().parse::<i64>();
    let end = cols[2].trim().parse::<i64>();

    match (start, end) {
        (Ok(start), Ok(end)) => {
            end.checked_sub(start) == Some(1)
                && cols.len() == MIN_BED_COLUMNS
                && cols[3].chars().count() == 1
        }
        _ => false,
    }
}

fn looks_like_vcf(cols: &[&str]) -> bool {
    cols.len() >= MIN_VCF_COLUMNS && cols[3].chars().count() == 1 && cols[4].chars().count() == 1
}
