use std::path::PathBuf;

use log::{error, info, warn};
use thiserror::Error;

use manta_core::MantaError;
use manta_core::models::{SnvImpact, Variant};
use manta_core::utils::get_file_info;
use manta_io::{determine_file_format, read_variants_file_by_label};

use crate::config::SearchConfig;
use crate::matcher::search_variants;
use crate::store::TfbsStore;

pub const READ_PROBLEMS_HEADING: &str =
    "The following problems were encountered when reading the SNV input file:";

pub const SEARCH_PROBLEMS_HEADING: &str = "The following problems were encountered when searching \
the MANTA2 database for SNVs impacting TFBSs:";

///
/// Reasons a search request is refused before any binding site is looked at.
///
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(
        "This is not an allowed file type. Please provide a file with one of the following extensions ({0}) or explicitly specify the file type."
    )]
    DisallowedExtension(String),

    #[error("Please choose a file format.")]
    FormatRequired,

    #[error("Could not determine input variant file format.")]
    UndeterminedFormat(Vec<String>),

    #[error("No SNVs read from file {file}.")]
    NoVariants { file: String, details: Vec<String> },

    #[error(transparent)]
    Manta(#[from] MantaError),
}

impl SearchError {
    ///
    /// Further messages explaining the refusal, to be shown after the error itself.
    ///
    pub fn details(&self) -> &[String] {
        match self {
            SearchError::UndeterminedFormat(errors) => errors,
            SearchError::NoVariants { details, .. } => details,
            _ => &[],
        }
    }
}

///
/// One search: a variant file and, optionally, the format the submitter said it is in.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub input: PathBuf,
    pub file_format: Option<String>,
}

///
/// Everything a search produced. Owned by the request, nothing is shared between searches
/// except the read-only store.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchReport {
    pub file_format: String,
    pub variants: Vec<Variant>,
    pub snv_impacts: Vec<SnvImpact>,
    pub warnings: Vec<String>,
}

impl SearchRequest {
    pub fn new(input: impl Into<PathBuf>, file_format: Option<String>) -> Self {
        SearchRequest {
            input: input.into(),
            file_format: file_format.map(|f| f.to_lowercase()),
        }
    }

    ///
    /// Run the search: settle the file format, read the variants, and match them against the
    /// store.
    ///
    /// # Arguments
    /// - store: the binding-site database
    /// - config: search settings
    pub fn run<S>(&self, store: &S, config: &SearchConfig) -> Result<SearchReport, SearchError>
    where
        S: TfbsStore + ?Sized,
    {
        let file_format = self.resolve_file_format(config)?;
        info!("The SNV filetype is {}", file_format);

        let parsed = read_variants_file_by_label(&self.input, &file_format)?;

        if parsed.variants.is_empty() {
            let hint = match &self.file_format {
                Some(supplied) => format!(
                    "Please make sure the file is formatted correctly according to the supplied file type of {}.",
                    supplied
                ),
                None => "Please make sure the file format matches one of the allowed file types. See the help page for a description of the file formats".to_string(),
            };

            let err = SearchError::NoVariants {
                file: self.input.display().to_string(),
                details: std::iter::once(hint).chain(parsed.errors).collect(),
            };
            error!("{}", err);
            return Err(err);
        }

        let mut warnings = Vec::new();

        if !parsed.errors.is_empty() {
            warn!("{}", READ_PROBLEMS_HEADING);
            warnings.push(READ_PROBLEMS_HEADING.to_string());
            warnings.extend(parsed.errors);
        }

        let searched = search_variants(store, &parsed.variants);

        if !searched.warnings.is_empty() {
            warnings.push(SEARCH_PROBLEMS_HEADING.to_string());
            warnings.extend(searched.warnings);
        }

        Ok(SearchReport {
            file_format,
            variants: parsed.variants,
            snv_impacts: searched.snv_impacts,
            warnings,
        })
    }

    fn resolve_file_format(&self, config: &SearchConfig) -> Result<String, SearchError> {
        if let Some(supplied) = &self.file_format {
            info!("The provided SNV filetype is {}", supplied);
            return Ok(supplied.clone());
        }

        if config.ask_for_filetype {
            return Err(SearchError::FormatRequired);
        }

        let extension = get_file_info(&self.input).extension;
        if !config.is_allowed_extension(extension.as_deref()) {
            let err = SearchError::DisallowedExtension(config.allowed_extensions.join(", "));
            warn!("{}", err);
            return Err(err);
        }

        let sniffed = determine_file_format(&self.input)?;
        match sniffed.file_format {
            Some(file_format) if sniffed.errors.is_empty() => Ok(file_format.to_string()),
            _ => {
                let err = SearchError::UndeterminedFormat(sniffed.errors);
                error!("{}", err);
                for e in err.details() {
                    error!("{}", e);
                }
                Err(err)
            }
        }
    }
}
