//! File store for uploaded cover images and roster files.
//!
//! Uploads land in a single flat directory served at `/uploads`. Stored
//! names are sanitized; a name collision overwrites the existing file.

use std::path::Path;

use crate::error::Result;

const ALLOWED_IMAGE_EXT: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Lowercased extension of the final path component, if any.
pub fn extension(filename: &str) -> Option<String> {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub fn is_allowed_image(filename: &str) -> bool {
    extension(filename)
        .map(|ext| ALLOWED_IMAGE_EXT.contains(&ext.as_str()))
        .unwrap_or(false)
}

pub fn is_csv(filename: &str) -> bool {
    extension(filename).map(|ext| ext == "csv").unwrap_or(false)
}

/// Reduce a client-supplied filename to a safe flat name: path components
/// are stripped and anything outside [A-Za-z0-9._-] becomes an underscore.
pub fn sanitize_filename(filename: &str) -> String {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Write an upload into the upload directory and return the stored name.
pub async fn save_upload(upload_dir: &Path, filename: &str, bytes: &[u8]) -> Result<String> {
    tokio::fs::create_dir_all(upload_dir).await?;
    let stored = sanitize_filename(filename);
    tokio::fs::write(upload_dir.join(&stored), bytes).await?;
    Ok(stored)
}
