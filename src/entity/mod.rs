//! SeaORM entities.

pub mod school;
