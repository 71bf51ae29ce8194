//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "School Directory Server",
        version = "0.1.0",
        description = "API server for managing a directory of schools with image uploads"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        api::health::health,
        api::schools::create_school,
        api::schools::list_schools,
        api::upload::upload_file,
    ),
    components(
        schemas(
            error::ErrorBody,
            api::health::HealthResponse,
            api::upload::UploadResponse,
            models::SchoolResponse,
            models::SchoolCreatedResponse,
            models::SchoolListResponse,
            models::SchoolUpdate,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Schools", description = "School directory management"),
        (name = "Upload", description = "Generic file upload")
    )
)]
pub struct ApiDoc;
