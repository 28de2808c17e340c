//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - AppState, the shared session record
//! - Form fields and the request snapshots built from them
//! - Reply and request bodies of the README service
//! - Application settings
//! - Message types for the event system

pub mod form;
pub mod messages;
pub mod reply;
pub mod settings;
pub mod state;

pub use form::{DraftSnapshot, FormField, FormSnapshot, FormState, IncludeFlag, TemplateType};
pub use messages::{CallOutcome, ClickTarget, CloseTrigger, Message, RequestId};
pub use reply::{ApiReply, ExportRequest, TemplateCatalog};
pub use settings::{AppSettings, ThemeMode};
pub use state::{AppState, PreviewMode, Technologies};
