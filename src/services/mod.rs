//! Service layer.

pub mod storage;

pub use storage::{ImageStore, StoredImage, MAX_IMAGE_BYTES};
