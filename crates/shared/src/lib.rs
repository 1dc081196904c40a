//! Shared types, errors, and configuration for Bankdash.
//!
//! This crate provides common types used across all other crates:
//! - Money and currency-code value types with decimal precision
//! - Validated timestamps for transaction display
//! - Typed IDs for account and transaction records
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DisplayConfig, RoundingMode};
pub use error::{AppError, AppResult};
