//! Media collection importer.
//!
//! The source is a JSON array of records:
//! `[{"fullpath": "/path/to/image1", "type": "image", "metadata": {"creator": "me", ...}}, ...]`
//!
//! A source that can't be read or decoded fails as a whole. After that each
//! record is validated on its own: a bad record is logged and skipped, it
//! never aborts the batch.

use crate::file::MediaFile;
use crate::timer::Timer;
use crate::validator::{validate, ValidationError};
use indexmap::IndexMap;
use log::{error, info, warn};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

const IN_MEMORY: &str = "<memory>";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error")]
    IO(#[from] std::io::Error),
    #[error("serde Json error")]
    SerdeJson(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid JSON file {origin}: check the file name, path and contents")]
    InvalidJsonFile {
        origin: String,
        #[source]
        source: SourceError,
    },
}

type Result<T> = std::result::Result<T, ImportError>;

/// One untyped record, as decoded from the source.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRecord {
    pub fullpath: String,
    #[serde(rename = "type")]
    pub file_type: String,
    /// Kept in document order, this is the order of the file's metadata.
    pub metadata: IndexMap<String, String>,
}

impl RawRecord {
    pub fn validate(&self) -> std::result::Result<MediaFile, ValidationError> {
        validate(&self.file_type, &self.metadata, &self.fullpath)
    }
}

/// A record that failed validation.
#[derive(Clone, Debug)]
pub struct RejectedRecord {
    /// Position of the record in the source.
    pub index: usize,
    pub fullpath: String,
    pub error: ValidationError,
}

/// Outcome of a batch import.
#[derive(Clone, Debug, Default)]
pub struct ImportReport {
    /// Validated files, in source order.
    pub files: Vec<MediaFile>,
    pub rejected: Vec<RejectedRecord>,
}

impl ImportReport {
    fn from_records(records: Vec<RawRecord>) -> Self {
        let mut report = ImportReport::default();

        for (index, record) in records.into_iter().enumerate() {
            match record.validate() {
                Ok(file) => report.files.push(file),
                Err(err) => {
                    warn!("Skipping record #{} ({}): {}", index, record.fullpath, err);
                    report.rejected.push(RejectedRecord {
                        index,
                        fullpath: record.fullpath,
                        error: err,
                    });
                }
            }
        }

        info!(
            "Imported {} files, rejected {} records",
            report.files.len(),
            report.rejected.len()
        );
        report
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

fn decode<R: Read>(origin: &str, reader: R) -> Result<Vec<RawRecord>> {
    serde_json::from_reader(reader).map_err(|e| {
        error!("Invalid JSON in {}: {}", origin, e);
        ImportError::InvalidJsonFile {
            origin: origin.to_owned(),
            source: e.into(),
        }
    })
}

/// Where a leading `~` in a source path points to.
enum HomeDir {
    /// The user's home directory, as found by `shellexpand`.
    User,
    Fixed(PathBuf),
    /// `~` is an ordinary path component.
    Literal,
}

pub struct FileImporter {
    home_dir: HomeDir,
}

impl Default for FileImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileImporter {
    /// An importer expanding `~` to the user's home directory.
    pub fn new() -> Self {
        Self {
            home_dir: HomeDir::User,
        }
    }

    pub fn with_home_dir<P: AsRef<Path>>(home_dir: P) -> Self {
        Self {
            home_dir: HomeDir::Fixed(home_dir.as_ref().to_path_buf()),
        }
    }

    /// An importer leaving `~` alone.
    pub fn without_home_dir() -> Self {
        Self {
            home_dir: HomeDir::Literal,
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        let raw = path.to_string_lossy();
        let expanded: Cow<'_, str> = match &self.home_dir {
            HomeDir::User => shellexpand::tilde(&raw),
            HomeDir::Fixed(home) => {
                shellexpand::tilde_with_context(&raw, || Some(home.to_string_lossy()))
            }
            HomeDir::Literal => return path.to_path_buf(),
        };
        PathBuf::from(expanded.into_owned())
    }

    /// Reads the media collection stored in this file, returning the
    /// files that passed validation.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Vec<MediaFile>> {
        self.read_report(path).map(|report| report.files)
    }

    /// Same as `read`, but also returns the records that were rejected.
    pub fn read_report<P: AsRef<Path>>(&self, path: P) -> Result<ImportReport> {
        let full_path = self.resolve(path.as_ref());
        let origin = full_path.display().to_string();
        let _timer = Timer::start(|| format!("Import {}", origin));

        let file = fs::File::open(&full_path).map_err(|e| {
            error!("Can't open {}: {}", origin, e);
            ImportError::InvalidJsonFile {
                origin: origin.clone(),
                source: e.into(),
            }
        })?;

        let records = decode(&origin, std::io::BufReader::new(file))?;
        Ok(ImportReport::from_records(records))
    }

    /// Imports from an in-memory JSON document. There's no path, so no `~`
    /// expansion either.
    pub fn from_slice(bytes: &[u8]) -> Result<ImportReport> {
        Self::from_reader(bytes)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ImportReport> {
        let _timer = Timer::start(|| "Import from reader".to_owned());
        let records = decode(IN_MEMORY, reader)?;
        Ok(ImportReport::from_records(records))
    }
}
