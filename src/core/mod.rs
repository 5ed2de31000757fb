//! Core components of the `stock-alert` job.
//!
//! This module contains the foundational building blocks, including:
//! - The [`AlertClient`] and its builder.
//! - The [`AlertError`] type and its [`ErrorKind`] classification.
//! - Startup configuration ([`Settings`], [`AlertConfig`]).
//! - The collaborator traits the alert pipeline is written against.

/// The HTTP client (`AlertClient`), builder, and default endpoints.
pub mod client;
/// Settings loaded once at startup.
pub mod config;
/// The primary error type (`AlertError`) for the crate.
pub mod error;
/// Service traits for the quote, news and notification collaborators.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::AlertClient`
pub use client::{AlertClient, AlertClientBuilder};
pub use config::{AlertConfig, Settings, load_dotenv, load_dotenv_from};
pub use error::{AlertError, ErrorKind};
pub use services::{NewsService, Notifier, QuoteService, ServiceFuture};
