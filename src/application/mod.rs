//! Application layer services implementing business logic.
//!
//! This layer coordinates code generation and storage. Services consume the
//! domain traits and provide a small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Create, resolve and inspect short links

pub mod services;
