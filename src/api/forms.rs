//! Multipart form field helpers shared by the upload-accepting endpoints.

use actix_multipart::Field;
use futures_util::StreamExt;

use crate::error::{AppError, AppResult};
use crate::services::MAX_IMAGE_BYTES;

/// An uploaded file part, buffered in memory.
///
/// Reads never buffer more than the image size cap: the first chunk that
/// would push past it aborts the read with `FileTooLarge`, so an unbounded
/// body cannot fill RAM. The storage adapter re-checks the size on save.
#[derive(Debug)]
pub struct FilePart {
    pub data: Vec<u8>,
    pub mime_type: String,
    pub original_name: String,
}

/// Read a text field to a UTF-8 string.
pub async fn read_text_field(field: &mut Field) -> AppResult<String> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk =
            chunk.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;
        bytes.extend_from_slice(&chunk);
    }

    String::from_utf8(bytes)
        .map_err(|_| AppError::InvalidInput("Form field is not valid UTF-8".to_string()))
}

/// Drain a multipart field without saving, so the stream can advance.
pub async fn drain_field(field: &mut Field) {
    while let Some(chunk) = field.next().await {
        let _ = chunk;
    }
}

/// Read a file field, capturing bytes, declared MIME type, and filename.
pub async fn read_file_field(field: &mut Field, original_name: String) -> AppResult<FilePart> {
    let mime_type = field
        .content_type()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk =
            chunk.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;
        if data.len() + chunk.len() > MAX_IMAGE_BYTES {
            return Err(AppError::FileTooLarge);
        }
        data.extend_from_slice(&chunk);
    }

    Ok(FilePart {
        data,
        mime_type,
        original_name,
    })
}
