use std::path::PathBuf;

use super::form::{FormField, IncludeFlag, TemplateType};
use super::state::PreviewMode;
use super::reply::{ApiReply, TemplateCatalog};

/// Identifies one network call so its completion can be matched and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// How a background call ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome<T> {
    /// The service answered with a decodable body.
    Completed(T),
    /// Transport, decode or worker failure. Carries detail for the log only.
    Failed(String),
    /// The task was cancelled before its result was delivered.
    Cancelled,
}

/// Which control asked the export dialog to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    CancelButton,
    Backdrop,
    Escape,
}

/// Where a click inside the dialog overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

/// Everything that can happen to a session.
/// UI callbacks send one of these; background calls post their completions;
/// the session's `handle` is the only place state changes.
#[derive(Debug, Clone)]
pub enum Message {
    // Form
    FieldChanged(FormField, String),
    FlagToggled(IncludeFlag, bool),
    TemplateSelected(Option<TemplateType>),
    TechnologyEntered(String),
    TechnologyRemoved(usize),

    // Generation
    Generate,
    GenerationFinished(RequestId, CallOutcome<ApiReply>),

    // Preview
    PreviewModeSelected(PreviewMode),

    // Document actions
    CopyDocument,
    DownloadDocument(PathBuf),

    // Export dialog
    OpenExportDialog,
    CloseExportDialog(CloseTrigger),
    ExportDialogClicked(ClickTarget),
    ExportUrlChanged(String),
    ExportTokenChanged(String),
    ConfirmExport,
    ExportFinished(RequestId, CallOutcome<ApiReply>),
    ValidateToken,
    TokenValidated(RequestId, CallOutcome<bool>),
    OpenRepositoryPage,

    // Keyboard
    EscapePressed,

    // Startup and housekeeping
    TemplatesLoaded(CallOutcome<TemplateCatalog>),
    RestoreDraft,
    Tick,
    Quit,
}
