//! Media file representation

use crate::metadata::Metadata;
use crate::validator::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const CREATOR: &str = "creator";
pub const RESOLUTION: &str = "resolution";
pub const RUNTIME: &str = "runtime";

/// The type tag of a media file, as found in the `type` field of an import record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Document,
    Video,
    Audio,
}

impl FileType {
    pub const ALL: [FileType; 4] = [
        FileType::Image,
        FileType::Document,
        FileType::Video,
        FileType::Audio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Document => "document",
            FileType::Video => "video",
            FileType::Audio => "audio",
        }
    }

    /// The metadata keywords a record of this type must carry.
    /// `creator` is always first.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            FileType::Image => &[CREATOR, RESOLUTION],
            FileType::Document => &[CREATOR],
            FileType::Video => &[CREATOR, RESOLUTION, RUNTIME],
            FileType::Audio => &[CREATOR, RUNTIME],
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidType(s.to_owned()))
    }
}

/// Type specific payload of a media file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MediaKind {
    Image { resolution: String },
    Document,
    Video { resolution: String, runtime: String },
    Audio { runtime: String },
}

impl MediaKind {
    pub fn file_type(&self) -> FileType {
        match self {
            MediaKind::Image { .. } => FileType::Image,
            MediaKind::Document => FileType::Document,
            MediaKind::Video { .. } => FileType::Video,
            MediaKind::Audio { .. } => FileType::Audio,
        }
    }

    pub fn resolution(&self) -> Option<&str> {
        match self {
            MediaKind::Image { resolution } | MediaKind::Video { resolution, .. } => {
                Some(resolution.as_str())
            }
            _ => None,
        }
    }

    pub fn runtime(&self) -> Option<&str> {
        match self {
            MediaKind::Video { runtime, .. } | MediaKind::Audio { runtime } => {
                Some(runtime.as_str())
            }
            _ => None,
        }
    }
}

/// Uniform access to the fields every media file has, whatever its type.
pub trait MediaItem {
    fn file_type(&self) -> FileType;
    fn filename(&self) -> &str;
    fn path(&self) -> &str;
    fn creator(&self) -> &str;
    fn metadata(&self) -> &[Metadata];

    /// True if any metadata entry has `term` as its keyword or value.
    fn has_term(&self, term: &str) -> bool {
        self.metadata().iter().any(|m| m.matches(term))
    }
}

/// A validated media file.
///
/// `filename` and `path` are computed once, when the import record is
/// validated, and never recomputed. Only the metadata list can change.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MediaFile {
    filename: String,
    path: String,
    creator: String,
    metadata: Vec<Metadata>,
    kind: MediaKind,
}

impl MediaFile {
    pub fn new(
        filename: &str,
        path: &str,
        creator: &str,
        metadata: Vec<Metadata>,
        kind: MediaKind,
    ) -> Self {
        Self {
            filename: filename.to_owned(),
            path: path.to_owned(),
            creator: creator.to_owned(),
            metadata,
            kind,
        }
    }

    pub fn image(
        filename: &str,
        path: &str,
        creator: &str,
        resolution: &str,
        metadata: Vec<Metadata>,
    ) -> Self {
        let kind = MediaKind::Image {
            resolution: resolution.to_owned(),
        };
        Self::new(filename, path, creator, metadata, kind)
    }

    pub fn document(filename: &str, path: &str, creator: &str, metadata: Vec<Metadata>) -> Self {
        Self::new(filename, path, creator, metadata, MediaKind::Document)
    }

    pub fn video(
        filename: &str,
        path: &str,
        creator: &str,
        resolution: &str,
        runtime: &str,
        metadata: Vec<Metadata>,
    ) -> Self {
        let kind = MediaKind::Video {
            resolution: resolution.to_owned(),
            runtime: runtime.to_owned(),
        };
        Self::new(filename, path, creator, metadata, kind)
    }

    pub fn audio(
        filename: &str,
        path: &str,
        creator: &str,
        runtime: &str,
        metadata: Vec<Metadata>,
    ) -> Self {
        let kind = MediaKind::Audio {
            runtime: runtime.to_owned(),
        };
        Self::new(filename, path, creator, metadata, kind)
    }

    pub fn kind(&self) -> &MediaKind {
        &self.kind
    }

    /// `path` and `filename` joined back together.
    pub fn full_path(&self) -> String {
        if self.path.is_empty() {
            self.filename.clone()
        } else {
            format!("{}/{}", self.path, self.filename)
        }
    }

    /// Whether `keyword` names a field this file's type can't go without.
    /// The library doesn't enforce this; a delete command can use it to
    /// refuse dropping a required tag.
    pub fn is_required_keyword(&self, keyword: &str) -> bool {
        self.file_type()
            .required_fields()
            .iter()
            .any(|field| field.eq_ignore_ascii_case(keyword))
    }

    pub(crate) fn push_metadata(&mut self, entry: Metadata) {
        self.metadata.push(entry);
    }

    /// Drops every entry with this keyword, returns how many went away.
    pub(crate) fn remove_metadata(&mut self, keyword: &str) -> usize {
        let before = self.metadata.len();
        self.metadata.retain(|m| m.keyword() != keyword);
        before - self.metadata.len()
    }
}

impl MediaItem for MediaFile {
    fn file_type(&self) -> FileType {
        self.kind.file_type()
    }

    fn filename(&self) -> &str {
        &self.filename
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn creator(&self) -> &str {
        &self.creator
    }

    fn metadata(&self) -> &[Metadata] {
        &self.metadata
    }
}

impl fmt::Display for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] by {}", self.full_path(), self.kind.file_type(), self.creator)?;
        for m in &self.metadata {
            write!(f, " {}={}", m.keyword(), m.value())?;
        }
        Ok(())
    }
}
