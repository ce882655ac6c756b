//! Shared types, errors, and configuration for SAMSES.
//!
//! This crate provides common types used across all other crates:
//! - Money amounts in integer kobo (never floats)
//! - Typed IDs for type-safe entity references
//! - Pagination types for list endpoints
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
