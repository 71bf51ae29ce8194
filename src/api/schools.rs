//! School API handlers.
//!
//! The create path runs strictly in sequence: parse multipart form, store
//! the image if one was attached, validate the merged fields, insert the
//! row. A storage failure returns before anything is persisted; a
//! validation failure after a successful image write leaves the file
//! orphaned on disk, which matches the documented behavior of this
//! service (no compensating delete).

use actix_multipart::Multipart;
use actix_web::{HttpResponse, get, post, web};
use futures_util::StreamExt;
use tracing::info;

use crate::api::forms::{self, FilePart};
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{RawSchoolForm, SchoolCreatedResponse, SchoolListResponse, SchoolResponse};
use crate::services::ImageStore;
use crate::validation::validate_school;

/// Create a school from a multipart form submission.
#[utoipa::path(
    post,
    path = "/api/schools",
    tag = "Schools",
    responses(
        (status = 201, description = "School created", body = SchoolCreatedResponse),
        (status = 400, description = "Validation or upload constraint failure", body = crate::error::ErrorBody),
        (status = 500, description = "Storage or database failure", body = crate::error::ErrorBody),
    )
)]
#[post("/schools")]
pub async fn create_school(
    mut payload: Multipart,
    pool: web::Data<DbPool>,
    store: web::Data<ImageStore>,
) -> AppResult<HttpResponse> {
    let (mut form, image) = parse_school_form(&mut payload).await?;

    // Store the image first; a constraint or write failure must surface
    // before any database row exists.
    if let Some(image) = image
        && !image.data.is_empty()
    {
        let stored = store
            .save(&image.data, &image.mime_type, &image.original_name)
            .await?;
        form.image = Some(stored.public_path);
    }

    let new_school = validate_school(&form).map_err(AppError::Validation)?;

    let created = pool.create_school(new_school).await?;
    info!("School {} created: {}", created.id, created.name);

    Ok(HttpResponse::Created().json(SchoolCreatedResponse {
        success: true,
        message: "School added successfully".to_string(),
        data: SchoolResponse::from(created),
    }))
}

/// List all schools, newest first.
#[utoipa::path(
    get,
    path = "/api/schools",
    tag = "Schools",
    responses(
        (status = 200, description = "School list", body = SchoolListResponse),
        (status = 500, description = "Database failure", body = crate::error::ErrorBody),
    )
)]
#[get("/schools")]
pub async fn list_schools(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let schools = pool.list_schools().await?;

    let data: Vec<SchoolResponse> = schools.into_iter().map(SchoolResponse::from).collect();
    let count = data.len();

    Ok(HttpResponse::Ok().json(SchoolListResponse {
        success: true,
        data,
        count,
    }))
}

/// Parse the multipart body into text fields plus the optional image part.
async fn parse_school_form(
    payload: &mut Multipart,
) -> AppResult<(RawSchoolForm, Option<FilePart>)> {
    let mut form = RawSchoolForm::default();
    let mut image: Option<FilePart> = None;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;

        let disposition = field
            .content_disposition()
            .ok_or_else(|| AppError::InvalidInput("Missing content disposition".to_string()))?;

        let Some(name) = disposition.get_name().map(str::to_string) else {
            forms::drain_field(&mut field).await;
            continue;
        };

        if name == "image" {
            let original_name = disposition
                .get_filename()
                .unwrap_or_default()
                .to_string();
            image = Some(forms::read_file_field(&mut field, original_name).await?);
        } else {
            let value = forms::read_text_field(&mut field).await?;
            form.set_field(&name, value);
        }
    }

    Ok((form, image))
}

/// Configure school routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_school).service(list_schools);
}
