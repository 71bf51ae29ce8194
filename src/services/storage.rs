//! Local filesystem storage for uploaded school images.
//!
//! Validates upload constraints and persists accepted files under the
//! public image root, returning a public-relative reference path. Names
//! are generated, never taken from the upload, so files cannot collide
//! or escape the root.

use std::path::{Path, PathBuf};

use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Maximum accepted upload size: 5 MiB exactly.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// MIME types accepted for school images.
const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// A successfully stored image.
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Generated filename on disk, `<uuid>.<ext>`.
    pub filename: String,
    /// Public-relative reference path, e.g. `/schoolImages/<uuid>.png`.
    pub public_path: String,
    /// Stored size in bytes.
    pub size: usize,
}

/// Filesystem-backed image store.
#[derive(Clone)]
pub struct ImageStore {
    root: PathBuf,
    public_prefix: String,
}

impl ImageStore {
    /// Create a store rooted at `root`, served under `public_prefix`.
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// Directory on disk backing the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate constraints and persist an uploaded image.
    ///
    /// Checks run in order, first failure wins: size, then MIME type.
    /// On success exactly one file is written under the root; the generated
    /// name guarantees no existing file is overwritten.
    pub async fn save(
        &self,
        data: &[u8],
        mime_type: &str,
        original_name: &str,
    ) -> AppResult<StoredImage> {
        if data.len() > MAX_IMAGE_BYTES {
            return Err(AppError::FileTooLarge);
        }

        if !ALLOWED_MIME_TYPES.contains(&mime_type.to_lowercase().as_str()) {
            return Err(AppError::UnsupportedFileType);
        }

        let extension = extension_of(original_name);
        let filename = match extension {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        // Idempotent create; "already exists" is fine.
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::StorageWrite(format!("creating image root: {}", e)))?;

        let target = self.root.join(&filename);
        tokio::fs::write(&target, data)
            .await
            .map_err(|e| AppError::StorageWrite(format!("writing {}: {}", filename, e)))?;

        info!("Stored image {} ({} bytes)", filename, data.len());

        Ok(StoredImage {
            public_path: format!("{}/{}", self.public_prefix, filename),
            filename,
            size: data.len(),
        })
    }
}

/// Lowercased extension of the original filename, if it has one.
fn extension_of(original_name: &str) -> Option<String> {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
