//! # Input/Output for variant searches.
//!
//! This crate reads the variant files submitted for a search and writes the resulting impact
//! reports:
//!
//! - [`sniff`]: guess the format of a variant file from its first data line,
//! - [`variants`]: decode VCF, GFF, BED or simple tab files into [`Variant`](manta_core::models::Variant)s,
//! - [`report`]: write [`SnvImpact`](manta_core::models::SnvImpact)s as an 18 column tab separated report.
//!
//! Neither the sniffer nor the parser fail on malformed content. Problems are collected as
//! human readable messages next to whatever could be read, so that a caller can show them to
//! the person who uploaded the file. Only I/O failures are returned as errors.
use std::io::{self, BufRead};

pub mod consts;
pub mod report;
pub mod sniff;
pub mod variants;

// re-expose core functions
pub use consts::*;
pub use report::*;
pub use sniff::*;
pub use variants::*;

///
/// Iterate over the lines of a reader, decoding each one lossily.
///
/// Variant files come from users and may carry stray non UTF-8 bytes (say in a VCF INFO
/// column). The columns that are read are plain ASCII, so such bytes are replaced rather than
/// failing the whole file. Line terminators (`\n` or `\r\n`) are removed.
pub(crate) struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    pub(crate) fn new(reader: R) -> Self {
        LossyLines {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

///
/// Split a line into columns on tabs, falling back to runs of whitespace when that yields
/// fewer than `min_cols` columns.
///
/// BED allows any whitespace between columns, VCF and GFF require tabs.
pub(crate) fn split_columns(line: &str, min_cols: usize) -> Vec<&str> {
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() >= min_cols {
        return cols;
    }
    line.split_whitespace().collect()
}
