//! Utility functions for code generation, URL validation, and error handling.
//!
//! - [`code_generator`] - Short code generation strategies
//! - [`url_validator`] - Absolute http/https URL validation
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
