//! Healthcare HTTP API.
//!
//! Computes body-mass metrics from a weight (kg) and height (cm) and serves
//! an OpenAPI document describing itself.
//!
//! ```text
//! GET /getHealthcare?weight=65&height=170
//! ─────────────────────────────────────────
//! {"bmi": 22.49, "suitable_weight": 63.58}
//! ```
//!
//! BMI is truncated (not rounded) to two decimal places. The suitable weight
//! is the weight at which BMI would equal 22.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Service and request error types
//! - [`health`]: BMI and suitable-weight calculations
//! - [`api`]: HTTP handlers, routes and the API document
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result, ServiceError};
