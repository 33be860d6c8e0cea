use std::io::BufRead;
use std::path::Path;

use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
use log::info;
use thiserror::Error;

use manta_core::MantaError;
use manta_core::models::TfbsSnv;
use manta_core::utils::{get_dynamic_reader, strip_chr_prefix};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Can't parse binding site record at line {line}: {source}")]
    RecordParseError {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Manta(#[from] MantaError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

///
/// Read access to the binding-site database.
///
/// Implementations are shared between concurrent searches, so they are only ever read.
///
pub trait TfbsStore: Send + Sync {
    ///
    /// Find every binding site on `chrom` holding a scored SNV entry at `position`.
    ///
    /// Sites come back in the store's own order.
    ///
    /// # Arguments
    /// - chrom: chromosome name without the `chr` prefix
    /// - position: 1-based position
    fn find_by_chrom_and_position<'a>(
        &'a self,
        chrom: &str,
        position: u64,
    ) -> Box<dyn Iterator<Item = &'a TfbsSnv> + 'a>;
}

///
/// A binding-site database held in memory, indexed by chromosome and SNV position.
///
/// Records are loaded from JSON lines, one binding-site document per line, as exported from
/// the document database the sites are computed into.
///
#[derive(Debug, Default)]
pub struct InMemoryTfbsStore {
    records: Vec<TfbsSnv>,
    // (chrom, position) -> record indices in file order
    by_position: HashMap<(String, u64), Vec<usize>>,
}

impl InMemoryTfbsStore {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn chrom_count(&self) -> usize {
        self.by_position
            .keys()
            .map(|(chrom, _)| chrom.as_str())
            .collect::<HashSet<&str>>()
            .len()
    }

    ///
    /// Load a store from JSON lines coming from any reader. Blank lines are ignored.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, StoreError> {
        let mut records = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let record: TfbsSnv = serde_json::from_str(&line)
                .map_err(|source| StoreError::RecordParseError {
                    line: idx + 1,
                    source,
                })?;
            records.push(record);
        }

        Ok(InMemoryTfbsStore::from(records))
    }
}

impl From<Vec<TfbsSnv>> for InMemoryTfbsStore {
    fn from(records: Vec<TfbsSnv>) -> Self {
        let mut by_position: HashMap<(String, u64), Vec<usize>> = HashMap::default();

        for (idx, record) in records.iter().enumerate() {
            let chrom = strip_chr_prefix(&record.chrom);
            for entry in &record.snvs {
                let indices = by_position
                    .entry((chrom.to_string(), entry.pos))
                    .or_default();
                // a site listing the same position twice is still one hit
                if indices.last() != Some(&idx) {
                    indices.push(idx);
                }
            }
        }

        InMemoryTfbsStore {
            records,
            by_position,
        }
    }
}

impl TryFrom<&Path> for InMemoryTfbsStore {
    type Error = StoreError;

    ///
    /// Load a store from a JSON lines file, possibly gzip'd.
    ///
    /// # Arguments:
    /// - value: path to the store file on disk.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(value)?;
        let store = InMemoryTfbsStore::from_reader(reader)?;

        info!(
            "Loaded {} binding sites on {} chromosomes from {}",
            store.len(),
            store.chrom_count(),
            value.display()
        );

        Ok(store)
    }
}

impl TfbsStore for InMemoryTfbsStore {
    fn find_by_chrom_and_position<'a>(
        &'a self,
        chrom: &str,
        position: u64,
    ) -> Box<dyn Iterator<Item = &'a TfbsSnv> + 'a> {
        let key = (strip_chr_prefix(chrom).to_string(), position);
        match self.by_position.get(&key) {
            Some(indices) => Box::new(indices.iter().map(move |&idx| &self.records[idx])),
            None => Box::new(std::iter::empty()),
        }
    }
}
