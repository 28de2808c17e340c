use std::fmt;

use crate::app::controllers::loading::LoadingIndicator;
use crate::app::controllers::modal::ModalController;
use crate::app::controllers::notification::NotificationCenter;
use crate::app::domain::{AppState, FormState};

/// Licenses offered before the service catalog arrives.
pub const DEFAULT_LICENSES: &[&str] = &["MIT", "Apache-2.0", "GPL-3.0"];

/// Contents of the export dialog's inputs.
#[derive(Clone, Default, PartialEq)]
pub struct ExportFields {
    pub repository_url: String,
    pub token: String,
}

impl fmt::Debug for ExportFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportFields")
            .field("repository_url", &self.repository_url)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

/// Per-session context handed to every controller. Built once when the
/// window opens and dropped with it.
#[derive(Debug)]
pub struct Workspace {
    pub state: AppState,
    pub form: FormState,
    pub export_fields: ExportFields,
    pub license_options: Vec<String>,
    pub technology_suggestions: Vec<String>,
    pub notifications: NotificationCenter,
    pub modal: ModalController,
    pub loading: LoadingIndicator,
    /// Copy/download/export controls, revealed by the first successful
    /// generation.
    pub actions_visible: bool,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            state: AppState::new(),
            form: FormState::default(),
            export_fields: ExportFields::default(),
            license_options: DEFAULT_LICENSES.iter().map(|s| s.to_string()).collect(),
            technology_suggestions: Vec::new(),
            notifications: NotificationCenter::new(),
            modal: ModalController::new(),
            loading: LoadingIndicator::new(),
            actions_visible: false,
        }
    }
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Append each incoming option not already present, keeping existing order.
/// Returns true if anything was added.
pub fn merge_options(existing: &mut Vec<String>, incoming: &[String]) -> bool {
    let before = existing.len();
    for option in incoming {
        let option = option.trim();
        if !option.is_empty() && !existing.iter().any(|o| o == option) {
            existing.push(option.to_string());
        }
    }
    existing.len() != before
}
