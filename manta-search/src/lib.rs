//! Search a database of transcription factor binding sites for the positions of a list of
//! single-nucleotide variants, and report how each variant changes the predicted binding.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use manta_core::models::{Impact, SnvEntry, TfbsSnv, Variant};
//! use manta_search::{InMemoryTfbsStore, search_variants};
//!
//! let impact = Impact {
//!     start: 95, end: 105, strand: "+".to_string(),
//!     abs_score: 6.0, rel_score: 0.6, impact: -0.2,
//! };
//! let store = InMemoryTfbsStore::from(vec![TfbsSnv {
//!     chrom: "1".to_string(), start: 95, end: 105, strand: "+".to_string(),
//!     abs_score: 9.0, rel_score: 0.9,
//!     matrix_id: "MA0139.1".to_string(), jaspar_tf_name: "CTCF".to_string(),
//!     snvs: vec![SnvEntry {
//!         pos: 100,
//!         ref_allele: "A".to_string(),
//!         impacts: BTreeMap::from([("G".to_string(), impact)]),
//!     }],
//! }]);
//!
//! let variants = vec![Variant {
//!     id: "rs1".to_string(), chrom: "1".to_string(), position: 100,
//!     ref_allele: "A".to_string(), alt_allele: "G".to_string(),
//! }];
//!
//! let result = search_variants(&store, &variants);
//! assert_eq!(result.snv_impacts.len(), 1);
//! assert!(result.warnings.is_empty());
//! ```

/// Search settings read from a TOML file.
pub mod config;

/// Matching variants against binding sites.
pub mod matcher;

/// One search request, from an input file to a report.
pub mod pipeline;

/// Where binding sites come from.
pub mod store;

// re-exports
pub use self::config::{SearchConfig, SearchConfigError};
pub use self::matcher::{SearchResult, search_variants};
pub use self::pipeline::{SearchError, SearchReport, SearchRequest};
pub use self::store::{InMemoryTfbsStore, StoreError, TfbsStore};
