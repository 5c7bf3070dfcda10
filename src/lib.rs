//! Minimal HTTP service reporting liveness and build metadata.
//!
//! Two read-only routes:
//!
//! ```text
//! GET /        {"message": "Hello, CI/CD with Flask!", "version": "1.0.0", "timestamp": "unknown"}
//! GET /health  {"status": "ok"}
//! ```
//!
//! `version` and `timestamp` come from `APP_VERSION` and `BUILD_TIMESTAMP`,
//! read on every request.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Request metrics and Prometheus exporter
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::{BuildInfo, Config};
pub use error::{Result, ServiceError};
