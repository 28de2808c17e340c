//! Infrastructure layer - external integrations and utilities.
//!
//! - Error types
//! - Message dispatch back onto the UI thread

pub mod dispatch;
pub mod error;
