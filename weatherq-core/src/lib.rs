//! Core library for the `weatherq` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The client for the weather-details endpoint
//! - Shared domain models (envelope, payload) and output rendering
//!
//! It is used by `weatherq-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod render;

pub use client::WeatherClient;
pub use config::Config;
pub use error::{ConfigError, FetchError};
pub use model::{ApiEnvelope, FieldValue, WeatherPayload};
