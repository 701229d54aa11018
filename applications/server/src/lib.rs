//! userd Server Library
//!
//! User management service exposing the same operations over a JSON REST
//! API (axum) and a gRPC API (tonic). Exactly one transport runs per
//! process, selected at startup.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod grpc;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use grpc::UserGrpc;
pub use services::{auth::AuthService, users::UserService};
pub use state::AppState;
