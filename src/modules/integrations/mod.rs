//! Clients for the external services the relay forwards to

pub mod google_auth;
pub mod google_vision;
pub mod spoonacular;

pub use google_vision::{GoogleVisionClient, VisionAuth};
pub use spoonacular::SpoonacularClient;
