//! In-memory media library.
//!
//! Files are kept in insertion order. Callers never hold a mutable
//! reference to a stored file: `add`, `all` and `search` hand out `FileId`
//! handles, and metadata changes go through the library with those.

use crate::file::{MediaFile, MediaItem};
use crate::metadata::Metadata;
use crate::timer::Timer;
use log::debug;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryError {
    #[error("No such file in library: {0}")]
    NoSuchFile(FileId),
}

type Result<T> = std::result::Result<T, LibraryError>;

/// Handle to a file held by a `Library`.
///
/// Handles stop resolving once the library is reset with `remove_all_files`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FileId {
    index: usize,
    generation: u64,
}

impl FileId {
    /// Position of the file in the library.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.generation)
    }
}

#[derive(Debug, Default)]
pub struct Library {
    files: Vec<MediaFile>,
    generation: u64,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    fn id_for(&self, index: usize) -> FileId {
        FileId {
            index,
            generation: self.generation,
        }
    }

    fn file_mut(&mut self, id: FileId) -> Result<&mut MediaFile> {
        if id.generation != self.generation {
            return Err(LibraryError::NoSuchFile(id));
        }
        self.files
            .get_mut(id.index)
            .ok_or(LibraryError::NoSuchFile(id))
    }

    /// Appends a file. Identical files are not detected: each add makes a
    /// new entry.
    pub fn add(&mut self, file: MediaFile) -> FileId {
        debug!("Adding {}", file.full_path());
        self.files.push(file);
        self.id_for(self.files.len() - 1)
    }

    /// Adds every file in order, returning their handles.
    pub fn add_all<I: IntoIterator<Item = MediaFile>>(&mut self, files: I) -> Vec<FileId> {
        files.into_iter().map(|file| self.add(file)).collect()
    }

    pub fn get(&self, id: FileId) -> Option<&MediaFile> {
        if id.generation != self.generation {
            return None;
        }
        self.files.get(id.index)
    }

    /// Appends `entry` at the end of the file's metadata.
    pub fn add_metadata(&mut self, id: FileId, entry: Metadata) -> Result<()> {
        let file = self.file_mut(id)?;
        debug!(
            "Adding {}={} to {}",
            entry.keyword(),
            entry.value(),
            file.filename()
        );
        file.push_metadata(entry);
        Ok(())
    }

    /// Removes every metadata entry with this keyword from the file and
    /// returns how many were removed. Removing a keyword the file doesn't
    /// have is not an error.
    pub fn remove_metadata(&mut self, id: FileId, keyword: &str) -> Result<usize> {
        let file = self.file_mut(id)?;
        let removed = file.remove_metadata(keyword);
        debug!(
            "Removed {} '{}' entries from {}",
            removed,
            keyword,
            file.filename()
        );
        Ok(removed)
    }

    /// Every file with its handle, in insertion order.
    pub fn all(&self) -> Vec<(FileId, &MediaFile)> {
        self.files
            .iter()
            .enumerate()
            .map(|(index, file)| (self.id_for(index), file))
            .collect()
    }

    /// Every file having a metadata entry whose keyword or value is exactly
    /// `term`, in insertion order. A file shows up once even when several of
    /// its entries match.
    pub fn search(&self, term: &str) -> Vec<(FileId, &MediaFile)> {
        let _timer = Timer::start(|| format!("Library search {}", term));

        self.files
            .iter()
            .enumerate()
            .filter(|(_, file)| file.has_term(term))
            .map(|(index, file)| (self.id_for(index), file))
            .collect()
    }

    /// Whether a structurally identical file is already held. The library
    /// itself never rejects duplicates.
    pub fn contains(&self, file: &MediaFile) -> bool {
        self.files.contains(file)
    }

    pub fn count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Empties the library. Handles issued before this are no longer valid.
    pub fn remove_all_files(&mut self) {
        debug!("Removing all {} files", self.files.len());
        self.files.clear();
        self.generation += 1;
    }
}
