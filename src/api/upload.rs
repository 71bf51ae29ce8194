//! Generic single-file upload endpoint.
//!
//! Independent of the schools flow but enforces the same constraints:
//! 5 MiB cap and the image MIME allow-list.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, post, web};
use futures_util::StreamExt;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::forms::{self, FilePart};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::services::ImageStore;

/// Response for a stored upload.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Generated filename on disk.
    pub filename: String,
    /// Filename as sent by the client.
    #[serde(rename = "originalName")]
    pub original_name: String,
    /// Public-relative path.
    pub path: String,
    /// Stored size in bytes.
    pub size: usize,
    /// Declared MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Absolute URL built from the public base URL.
    pub url: String,
}

/// Upload a single file.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "Upload",
    responses(
        (status = 201, description = "File stored", body = UploadResponse),
        (status = 400, description = "Constraint failure or missing file", body = crate::error::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::error::ErrorBody),
    )
)]
#[post("/upload")]
pub async fn upload_file(
    mut payload: Multipart,
    store: web::Data<ImageStore>,
    config: web::Data<Config>,
) -> AppResult<HttpResponse> {
    let file = first_file_part(&mut payload)
        .await?
        .ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;

    let stored = store
        .save(&file.data, &file.mime_type, &file.original_name)
        .await?;

    Ok(HttpResponse::Created().json(UploadResponse {
        url: format!("{}{}", config.public_base_url, stored.public_path),
        filename: stored.filename,
        original_name: file.original_name,
        path: stored.public_path,
        size: stored.size,
        mime_type: file.mime_type,
    }))
}

/// Pull the first file part out of the multipart body.
async fn first_file_part(payload: &mut Multipart) -> AppResult<Option<FilePart>> {
    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;

        let disposition = field
            .content_disposition()
            .ok_or_else(|| AppError::InvalidInput("Missing content disposition".to_string()))?;

        let Some(original_name) = disposition.get_filename().map(str::to_string) else {
            forms::drain_field(&mut field).await;
            continue;
        };

        return Ok(Some(forms::read_file_field(&mut field, original_name).await?));
    }

    Ok(None)
}

/// Configure upload routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_file);
}
