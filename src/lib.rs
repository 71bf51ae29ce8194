//! School Directory Server library.
//!
//! This library provides the core functionality for the school directory
//! service: the repository over the `schools` relation, form validation,
//! image storage, the HTTP API, and a client for the school list feed.

pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
pub mod validation;
