//! Controllers layer - orchestration and coordination.
//!
//! Each controller owns one piece of the session's behavior and works on
//! the shared `Workspace` handed to it:
//! - Tag list editing
//! - README generation and export calls
//! - Markdown preview
//! - Notifications, the export dialog and the busy indicator
//! - Draft autosave

pub mod export;
pub mod generation;
pub mod loading;
pub mod modal;
pub mod notification;
pub mod persistence;
pub mod preview;
pub mod tags;
