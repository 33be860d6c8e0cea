//! # Core models for manta.
//!
//! `manta` searches a precomputed database of transcription factor binding sites (TFBS)
//! for positions overlapping a list of single-nucleotide variants (SNVs) and reports the
//! predicted impact of each variant on binding.
//!
//! This crate holds the pieces every other crate needs: the [`models`] (variants,
//! binding-site records and impact records), the SNV [`alleles`] check, error types and a few
//! small reader utilities.
pub mod alleles;
pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use self::alleles::is_valid_snv;
pub use self::errors::{MantaError, Result};
