//! API endpoint modules.

pub mod forms;
pub mod health;
pub mod openapi;
pub mod schools;
pub mod upload;

pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use schools::configure_routes as configure_school_routes;
pub use upload::configure_routes as configure_upload_routes;
