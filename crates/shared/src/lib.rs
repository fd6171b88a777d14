//! Shared types, coercion utilities, and configuration for Kasira.
//!
//! This crate provides common building blocks used by the engine crate
//! and the binaries:
//! - Typed IDs for type-safe entity references
//! - Numeric coercion for raw form input
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
