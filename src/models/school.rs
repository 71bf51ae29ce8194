//! Request and response models for school records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::school;

/// Untrusted capture of an incoming multipart form. Every field is optional
/// until validation has run; nothing downstream may consume this directly.
#[derive(Debug, Default, Clone)]
pub struct RawSchoolForm {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub contact: Option<String>,
    pub email_id: Option<String>,
    /// Public-relative image path, resolved by the storage adapter before
    /// validation runs.
    pub image: Option<String>,
}

impl RawSchoolForm {
    /// Capture one multipart text field by name. Unknown fields are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = Some(value),
            "address" => self.address = Some(value),
            "city" => self.city = Some(value),
            "state" => self.state = Some(value),
            "contact" => self.contact = Some(value),
            "email_id" => self.email_id = Some(value),
            _ => {}
        }
    }
}

/// A validated, normalized school ready for insertion. Only produced by
/// `validation::validate_school`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub image: Option<String>,
}

/// Partial update for a school record. The repository only writes the
/// fields that are `Some`; an all-`None` update is rejected.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct SchoolUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub contact: Option<String>,
    pub email_id: Option<String>,
    pub image: Option<String>,
}

impl SchoolUpdate {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.contact.is_none()
            && self.email_id.is_none()
            && self.image.is_none()
    }
}

/// API representation of a persisted school record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SchoolResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub image: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<school::Model> for SchoolResponse {
    fn from(model: school::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            address: model.address,
            city: model.city,
            state: model.state,
            contact: model.contact,
            email_id: model.email_id,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Response body for the school list endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SchoolListResponse {
    pub success: bool,
    pub data: Vec<SchoolResponse>,
    pub count: usize,
}

/// Response body for a successful create.
#[derive(Debug, Serialize, ToSchema)]
pub struct SchoolCreatedResponse {
    pub success: bool,
    pub message: String,
    pub data: SchoolResponse,
}
