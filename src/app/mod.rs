//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (form, state, settings, messages)
//! - `controllers/` - Orchestration (generation, export, preview, tags, ...)
//! - `services/` - HTTP client, draft storage, background tasks
//! - `infrastructure/` - Errors and message dispatch
//! - `session.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod session;
pub mod view;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenient external access
pub use domain::{AppSettings, Message, ThemeMode};
pub use infrastructure::dispatch::Dispatch;
pub use infrastructure::error::{AppError, Result};
pub use session::Session;
pub use view::View;
