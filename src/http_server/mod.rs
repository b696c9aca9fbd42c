//! # HTTP Server Module
//!
//! Axum server for the resource API.
//!
//! # Endpoints
//!
//! - `POST /api/users` - Create a user
//! - `POST /api/books` - Create a book
//! - `POST /api/reviews` - Create a review
//! - `/health` - Health check
//! - `/observability/*` - Health and metrics

pub mod config;
pub mod errors;
pub mod observability_routes;
mod payload;
pub mod resource_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use resource_routes::ResourceState;
pub use server::HttpServer;
