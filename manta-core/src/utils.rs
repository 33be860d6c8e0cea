use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::errors::{MantaError, Result};

pub struct FileInfo {
    /// Lower-cased extension without the dot, looking past a trailing `.gz`.
    pub extension: Option<String>,
    pub is_gzipped: bool,
}

pub fn get_file_info(path: &Path) -> FileInfo {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));

    let base = match is_gzipped {
        true => path.file_stem().map(PathBuf::from).unwrap_or_default(),
        false => path.to_path_buf(),
    };

    let extension = base
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    FileInfo {
        extension,
        is_gzipped,
    }
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path)
        .map_err(|e| MantaError::FileReadError(format!("{}: {}", path.display(), e)))?;

    let file: Box<dyn Read> = match get_file_info(path).is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Drop a leading `chr` from a chromosome name, e.g. `chr1` -> `1`.
///
pub fn strip_chr_prefix(chrom: &str) -> &str {
    chrom.strip_prefix("chr").unwrap_or(chrom)
}

/// Does the column hold an integer?
pub fn is_int(val: &str) -> bool {
    val.trim().parse::<i64>().is_ok()
}
