//! Turns untyped import records into typed media files.
//!
//! A record is checked once, here: if it comes back as a `MediaFile` it
//! carries every field its type requires.

use crate::file::{FileType, MediaFile, MediaKind, CREATOR, RESOLUTION, RUNTIME};
use crate::metadata::Metadata;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid file type '{0}', expecting image, document, video or audio")]
    InvalidType(String),
    #[error("Invalid metadata for type '{file_type}': missing '{field}'")]
    InvalidMetadataForType { file_type: String, field: String },
    /// Not raised by the library: adding the same file twice is allowed.
    #[error("Identical file already in library")]
    DuplicateMedia,
}

const HOME_SHORTHAND: &str = "~";

/// Splits a combined path into `(filename, path)`.
///
/// The filename is the last non-empty segment, the path is every segment
/// before it, each prefixed with '/'. A leading `~` is kept as is instead.
pub(crate) fn split_path(combined: &str) -> (String, String) {
    let mut parts: Vec<&str> = combined.split('/').filter(|s| !s.is_empty()).collect();
    let filename = parts.pop().unwrap_or_default().to_owned();

    let mut path = String::new();
    for (i, part) in parts.iter().enumerate() {
        if !(i == 0 && *part == HOME_SHORTHAND) {
            path.push('/');
        }
        path.push_str(part);
    }

    (filename, path)
}

/// Validates one record and builds the matching media file.
///
/// Every metadata pair is kept, in iteration order. The `creator`,
/// `resolution` and `runtime` keys are matched case-insensitively and their
/// values are lowercased when copied to the typed fields. A missing creator
/// is reported before the type is even looked at.
pub fn validate<I, K, V>(
    raw_type: &str,
    raw_metadata: I,
    combined_path: &str,
) -> Result<MediaFile, ValidationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut creator = None;
    let mut resolution = None;
    let mut runtime = None;
    let mut metadata = vec![];

    for (key, value) in raw_metadata {
        let (key, value) = (key.as_ref(), value.as_ref());
        let lower_key = key.to_lowercase();
        match lower_key.as_str() {
            CREATOR => creator = Some(value.to_lowercase()),
            RESOLUTION => resolution = Some(value.to_lowercase()),
            RUNTIME => runtime = Some(value.to_lowercase()),
            _ => {}
        }
        metadata.push(Metadata::new(key, value));
    }

    let missing = |field: &str| ValidationError::InvalidMetadataForType {
        file_type: raw_type.to_owned(),
        field: field.to_owned(),
    };

    let creator = creator.ok_or_else(|| missing(CREATOR))?;

    let kind = match raw_type.parse::<FileType>()? {
        FileType::Image => MediaKind::Image {
            resolution: resolution.ok_or_else(|| missing(RESOLUTION))?,
        },
        FileType::Document => MediaKind::Document,
        FileType::Video => MediaKind::Video {
            resolution: resolution.ok_or_else(|| missing(RESOLUTION))?,
            runtime: runtime.ok_or_else(|| missing(RUNTIME))?,
        },
        FileType::Audio => MediaKind::Audio {
            runtime: runtime.ok_or_else(|| missing(RUNTIME))?,
        },
    };

    let (filename, path) = split_path(combined_path);

    Ok(MediaFile::new(&filename, &path, &creator, metadata, kind))
}
