//! # Toolbridge - Remote Tool Invocation Client
//!
//! Typed async client for tool-invocation HTTP servers providing:
//! - Tool catalog retrieval with process-lifetime caching (`GET /tools`)
//! - Single-shot tool calls with typed error surfacing (`POST /call`)
//! - Server health probing (`GET /health`)
//! - Thin adapters for CrewAI-, AutoGen-, and LangChain-style tool registration
//!
//! ## Architecture
//!
//! The clients are leaves; adapters sit on top of them:
//! ```text
//!   CrewAiTool / AutoGenToolkit / LangChainToolkit
//!                      │
//!             InvocableTool seam
//!                      │
//!    InvocationClient     CatalogClient
//!           │                  │
//!       POST /call         GET /tools        GET /health
//!                 (remote tool server)
//! ```
//!
//! Every failure is surfaced as a typed [`Error`]; the clients never retry.
//! Retry and fallback policy belong to the calling framework glue.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod adapters;
pub mod catalog;
pub mod client;
pub mod types;

// Internal utilities
pub mod observability;

pub use catalog::{Catalog, ToolDescriptor};
pub use client::{CatalogClient, HealthStatus, InvocationClient};
pub use types::{ClientConfig, Error, Result};
