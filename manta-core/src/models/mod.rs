pub mod file_format;
pub mod snv_impact;
pub mod tfbs;
pub mod variant;

// re-export for cleaner imports
pub use self::file_format::VariantFileFormat;
pub use self::snv_impact::SnvImpact;
pub use self::tfbs::{Impact, SnvEntry, TfbsSnv};
pub use self::variant::{UNKNOWN_ALLELE, UNKNOWN_ID, Variant};
