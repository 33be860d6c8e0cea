use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extensions accepted for variant files whose format isn't given explicitly.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["vcf", "bed", "gff", "txt"];

#[derive(Error, Debug)]
pub enum SearchConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type SearchConfigResult<T> = std::result::Result<T, SearchConfigError>;

///
/// Settings of a search, read from a TOML file. Every key is optional.
///
/// ```toml
/// store = "/data/manta/tfbs_snvs.jsonl.gz"
/// output = "results/manta_results.txt"
/// allowed_extensions = ["vcf", "bed", "gff", "txt"]
/// ask_for_filetype = false
/// ```
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// binding-site store file
    pub store: Option<PathBuf>,
    /// report file, stdout when unset
    pub output: Option<PathBuf>,
    pub allowed_extensions: Vec<String>,
    /// require the variant file format to be given instead of sniffing it
    pub ask_for_filetype: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            store: None,
            output: None,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            ask_for_filetype: false,
        }
    }
}

impl SearchConfig {
    pub fn is_allowed_extension(&self, extension: Option<&str>) -> bool {
        extension.is_some_and(|ext| self.allowed_extensions.iter().any(|a| a == ext))
    }
}

impl TryFrom<&Path> for SearchConfig {
    type Error = SearchConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
