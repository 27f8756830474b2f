//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. URL checks
//! happen in the service layer, not here.

pub mod health;
pub mod shorten;
pub mod stats;
