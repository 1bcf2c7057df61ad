//! Shared types, errors, and configuration for Finplan.
//!
//! This crate provides common types used across all other crates:
//! - Lenient decimal parsing for user-entered amounts
//! - Typed IDs for ledger entries and investment positions
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::PlannerConfig;
pub use error::{AppError, AppResult};
