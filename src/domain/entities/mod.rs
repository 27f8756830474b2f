//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without storage or transport concerns.
//!
//! # Entity Types
//!
//! - [`Link`] - A short identifier mapped to its original URL

pub mod link;

pub use link::Link;
