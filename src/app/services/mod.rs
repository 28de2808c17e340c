//! Services layer - external collaborators and background work.
//!
//! This module contains:
//! - The README generation service client
//! - Durable draft storage
//! - Cancellable background calls

pub mod api;
pub mod draft_store;
pub mod task;
