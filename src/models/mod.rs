//! Domain models for the school directory.

pub mod school;

pub use school::{
    NewSchool, RawSchoolForm, SchoolCreatedResponse, SchoolListResponse, SchoolResponse,
    SchoolUpdate,
};
