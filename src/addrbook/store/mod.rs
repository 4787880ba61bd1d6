//! # Storage Layer
//!
//! [`AddressBook`] is the keyed collection of [`Record`]s. It exposes only
//! the operations below, never general map mutation, so the key of every
//! entry is always the entry's own name:
//!
//! - `add_record` / `find` / `find_mut` / `delete`
//! - `iterator`: fixed-size pages over a snapshot taken at call time
//! - `search`: case-insensitive name match or phone substring match
//! - `save` / `load`: whole-book JSON snapshots, see [`fs`]
//!
//! ## Ordering
//!
//! Records are kept in key order. Pagination, search results and the file
//! on disk all see the same stable order.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "Ann Lee": { "name": "Ann Lee", "phones": ["5551234567"], "birthday": "1990-01-10" },
//!   "Bob":     { "name": "Bob", "phones": [], "birthday": null }
//! }
//! ```
//!
//! The book holds no default path. Callers always say where to save and
//! load from.

use crate::error::Result;
use crate::model::Record;
use std::collections::BTreeMap;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub mod fs;

/// Page size used when the caller has no preference.
pub const DEFAULT_CHUNK_SIZE: usize = 5;

/// Outcome of [`AddressBook::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// No file yet. A normal first start.
    Missing,
    /// Loaded this many records
    Loaded(usize),
    /// The file was empty or unreadable. It was moved to `backup` and the
    /// book starts empty.
    Recovered { reason: String, backup: PathBuf },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Inserts `record` under its own name. An existing record with that
    /// name is replaced entirely; phone lists are not merged.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key, record).is_some() {
            debug!("replaced existing record");
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access for phone and birthday edits. The name of a record
    /// cannot change, so the key stays valid.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes `name` if present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Pages of at most `chunk_size` records over a copy of the book taken
    /// now. Later changes to the book are not seen by the returned iterator.
    /// A `chunk_size` of zero is treated as one.
    pub fn iterator(&self, chunk_size: usize) -> RecordChunks {
        RecordChunks {
            remaining: self.records.values().cloned().collect::<Vec<_>>().into_iter(),
            chunk_size: chunk_size.max(1),
        }
    }

    /// All records whose name contains `query` ignoring case, or whose
    /// phone contains `query` as typed. Results follow store order.
    pub fn search(&self, query: &str) -> Vec<Record> {
        let found: Vec<Record> = self
            .records
            .values()
            .filter(|record| record.matches(query))
            .cloned()
            .collect();
        debug!(query, matches = found.len(), "search");
        found
    }

    /// Writes the whole book to `path`, replacing what was there.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write_snapshot(path, &self.records)?;
        info!(path = %path.display(), records = self.records.len(), "saved address book");
        Ok(())
    }

    /// Replaces the in-memory book with the snapshot at `path`.
    ///
    /// A missing file leaves the book empty. An empty or corrupt file is
    /// moved aside and the book starts empty. Other I/O errors propagate.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        match fs::read_snapshot(path)? {
            fs::Snapshot::Missing => {
                self.records.clear();
                debug!(path = %path.display(), "no address book file yet");
                Ok(LoadReport::Missing)
            }
            fs::Snapshot::Loaded(stored) => {
                self.records = rekey(stored);
                info!(path = %path.display(), records = self.records.len(), "loaded address book");
                Ok(LoadReport::Loaded(self.records.len()))
            }
            fs::Snapshot::Corrupt(reason) => {
                let backup = fs::quarantine(path)?;
                self.records.clear();
                warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    %reason,
                    "address book file unreadable, starting empty"
                );
                Ok(LoadReport::Recovered { reason, backup })
            }
        }
    }
}

/// Puts every record under its own name. A hand-edited file may disagree.
///
/// When two entries hold the same name, the one already stored under that
/// name wins and the other is dropped with a warning.
fn rekey(stored: BTreeMap<String, Record>) -> BTreeMap<String, Record> {
    let mut records: BTreeMap<String, Record> = BTreeMap::new();
    for (key, record) in stored {
        let name = record.name().as_str().to_string();
        if key != name {
            warn!(key = %key, name = %name, "stored key differs from record name, re-keying");
        }

        let kept = records.get(&name).map(ToString::to_string);
        match kept {
            Some(kept) if key == name => {
                warn!(name = %name, dropped = %kept, "duplicate contact in file, dropping re-keyed entry");
                records.insert(name, record);
            }
            Some(kept) => {
                warn!(name = %name, key = %key, dropped = %record, kept = %kept, "duplicate contact in file, dropping entry");
            }
            None => {
                records.insert(name, record);
            }
        }
    }
    records
}

/// Iterator returned by [`AddressBook::iterator`].
///
/// Finite and not restartable: once it returns `None` it keeps returning
/// `None`. An empty book yields no pages at all.
#[derive(Debug)]
pub struct RecordChunks {
    remaining: std::vec::IntoIter<Record>,
    chunk_size: usize,
}

impl Iterator for RecordChunks {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<Record> = self.remaining.by_ref().take(self.chunk_size).collect();
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}

impl FusedIterator for RecordChunks {}
