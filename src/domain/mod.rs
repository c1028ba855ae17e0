//! Domain layer - Pure abstractions over the external services
//!
//! This layer contains NO framework dependencies (no Axum, no reqwest).
//! Only trait definitions, request shapes and domain error types.

pub mod errors;
pub mod ingredients;
pub mod services;

pub use errors::ServiceError;
pub use services::*;
