pub const MIN_SNIFF_COLUMNS: usize = 4;
pub const MIN_VCF_COLUMNS: usize = 5;
pub const GFF_COLUMNS: usize = 9;
pub const MIN_BED_COLUMNS: usize = 4;
pub const MIN_SIMPLE_COLUMNS: usize = 4;

/// Marker of the VCF meta line `##fileformat=VCFv4.x`.
pub const VCF_FILEFORMAT_MARKER: &str = "fileformat=VCF";

pub const TOO_FEW_COLUMNS_ERR: &str = "Provided variant file has less than 4 columns";

pub const GFF_TOO_FEW_COLUMNS_ERR: &str =
    "Provided variant file appears to be a GFF file but has less than 9 columns";

pub const VCF_COLUMNS_ERR: &str = "For VCF formatted input, please make sure that at least the \
first 5 columns are provided. PLEASE NOTE that the VCF format specification requires that the \
columns be tab-separated (this error often occurs if the VCF input columns were \
space-separated). Also, PLEASE NOTE that if you do not have a value for the ID field, please \
use a dot (\".\") instead of leaving it blank.";

pub const GFF_COLUMNS_ERR: &str = "For GFF formatted input, please make sure that 9 columns are \
provided. PLEASE NOTE that the GFF format specification requires that the columns be \
tab-separated (this error often occurs if the GFF input columns were space-separated). Also, \
PLEASE NOTE that if you do not have a value for one of the \"optional\" fields, e.g. the source \
field, please use a dot (\".\") instead of leaving it blank.";

pub const BED_COLUMNS_ERR: &str = "For BED formatted input, please make sure that at least the \
first 4 columns are provided. The fields in the BED lines may be tab or space separated.";

pub const SIMPLE_COLUMNS_ERR: &str = "The provided SNV file appears to contain less than 4 \
columns. Please make sure file is tab-delimited.";

/// GFF attribute keys holding the reference allele.
pub const GFF_REF_ALLELE_KEYS: &[&str] = &["ref_allele", "reference_allele"];

/// GFF attribute keys holding the alternate allele.
pub const GFF_ALT_ALLELE_KEYS: &[&str] = &["alt_allele"];
