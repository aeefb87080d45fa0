//! A personal media catalog.
//!
//! Media descriptions (images, documents, videos and audio files) are
//! imported from a JSON file, validated against the fields their type
//! requires, and kept in an in-memory `Library` that can be tagged and
//! searched. Media content itself is never read.

pub mod file;
pub mod importer;
pub mod library;
pub mod metadata;
mod timer;
pub mod validator;

pub use file::{FileType, MediaFile, MediaItem, MediaKind};
pub use importer::{FileImporter, ImportError, ImportReport, RawRecord, RejectedRecord};
pub use library::{FileId, Library, LibraryError};
pub use metadata::Metadata;
pub use validator::{validate, ValidationError};
