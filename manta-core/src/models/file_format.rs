use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::MantaError;

///
/// Input variant file formats understood by the parser.
///
/// `Simple` is a bare `chrom  position  ref  alt` tab file used for testing. It is never
/// produced by the sniffer and has to be asked for explicitly.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantFileFormat {
    Vcf,
    Gff,
    Bed,
    Simple,
}

impl VariantFileFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantFileFormat::Vcf => "vcf",
            VariantFileFormat::Gff => "gff",
            VariantFileFormat::Bed => "bed",
            VariantFileFormat::Simple => "simple",
        }
    }
}

impl FromStr for VariantFileFormat {
    type Err = MantaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vcf" => Ok(VariantFileFormat::Vcf),
            "gff" => Ok(VariantFileFormat::Gff),
            "bed" => Ok(VariantFileFormat::Bed),
            "simple" => Ok(VariantFileFormat::Simple),
            _ => Err(MantaError::UnknownFileFormat(s.to_string())),
        }
    }
}

impl Display for VariantFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
