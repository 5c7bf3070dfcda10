//! HTTP API module for the health and root endpoints.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
