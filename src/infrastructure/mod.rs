//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - HTTP server setup (server)
//! - Request-scoped upload storage (upload)
//! - Application state (state)

pub mod config;
pub mod server;
pub mod state;
pub mod upload;

pub use state::AppState;
