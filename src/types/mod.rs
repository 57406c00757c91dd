//! Core types for the toolbridge client.
//!
//! This module provides foundational types used throughout the crate:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Client and observability configuration structures

mod config;
mod errors;

pub use config::{ClientConfig, ObservabilityConfig, API_KEY_HEADER};
pub use errors::{Error, Result};
