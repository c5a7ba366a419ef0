//! Capturing a user-selected document
//!
//! Only the file's name, size and type are recorded. Contents are never read.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// MIME recorded for dropped files of a type the picker does not offer
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Extensions offered by the file picker
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),
    #[error("unsupported file type (accepted: .pdf, .png, .jpg, .jpeg): {0}")]
    Unsupported(PathBuf),
    #[error("could not read file metadata: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// Turn pasted or typed input into a path. Terminals wrap dropped paths in
/// quotes or escape spaces, and some paste a `file://` URL.
pub fn normalize_dropped_path(input: &str) -> PathBuf {
    let trimmed = input.trim();
    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(trimmed);
    let without_scheme = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    PathBuf::from(without_scheme.replace("\\ ", " "))
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Record a file chosen through the picker. Only the accepted extensions are allowed.
    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        Self::capture(path, true)
    }

    /// Record a dropped file. Any regular file is accepted; unknown types get
    /// [`FALLBACK_MIME`].
    pub fn from_dropped_path(path: &Path) -> Result<Self, UploadError> {
        Self::capture(path, false)
    }

    fn capture(path: &Path, picker: bool) -> Result<Self, UploadError> {
        if !path.exists() {
            return Err(UploadError::NotFound(path.to_path_buf()));
        }

        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(UploadError::NotAFile(path.to_path_buf()));
        }

        let mime = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(mime_for_extension);
        let mime = match mime {
            Some(mime) => mime,
            None if picker => return Err(UploadError::Unsupported(path.to_path_buf())),
            None => FALLBACK_MIME,
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(name, metadata.len(), mime))
    }

    /// Size in megabytes with two decimals, e.g. `1.50`
    pub fn size_mb(&self) -> String {
        format!("{:.2}", self.size as f64 / 1024.0 / 1024.0)
    }

    pub fn kind(&self) -> FileKind {
        if self.mime.contains("pdf") {
            FileKind::Pdf
        } else if self.mime.contains("image") {
            FileKind::Image
        } else {
            FileKind::Other
        }
    }
}
