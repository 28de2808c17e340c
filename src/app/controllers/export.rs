use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use super::loading::BusyCall;
use super::notification::Severity;
use crate::app::domain::{ApiReply, CallOutcome, ExportRequest, Message, RequestId};
use crate::app::infrastructure::dispatch::Dispatch;
use crate::app::services::api::ReadmeApi;
use crate::app::services::task::{Task, TaskSet};
use crate::app::workspace::Workspace;

pub const EXPORTED: &str = "README exported to GitHub successfully!";
pub const EXPORT_FAILED: &str = "Export failed";
pub const EXPORT_UNREACHABLE: &str = "Connection error during export";
pub const FIELDS_MISSING: &str = "Please fill in all fields";
pub const NOTHING_TO_EXPORT: &str = "Generate a README first";
pub const TOKEN_VALID: &str = "GitHub token is valid";
pub const TOKEN_INVALID: &str = "GitHub token is invalid";
pub const TOKEN_UNCHECKED: &str = "Could not validate the token";

/// Drives the export dialog and the push-to-repository call.
pub struct ExportController {
    api: Arc<dyn ReadmeApi>,
    tasks: TaskSet,
    token_checks: TaskSet,
    /// Repository each running export was started for.
    targets: HashMap<RequestId, String>,
    /// Repository of the most recent successful export.
    last_exported: Option<String>,
}

impl ExportController {
    pub fn new(api: Arc<dyn ReadmeApi>) -> Self {
        Self {
            api,
            tasks: TaskSet::new(),
            token_checks: TaskSet::new(),
            targets: HashMap::new(),
            last_exported: None,
        }
    }

    /// Open the dialog, pre-filling the repository URL from the form.
    /// Returns false when there is nothing to export yet.
    pub fn open_dialog(&mut self, ctx: &mut Workspace, now: Instant) -> bool {
        if !ctx.state.has_document() {
            ctx.notifications
                .notify(NOTHING_TO_EXPORT, Severity::Warning, now);
            return false;
        }
        let form_url = ctx.form.repository_url.trim();
        if !form_url.is_empty() {
            ctx.export_fields.repository_url = form_url.to_string();
        }
        ctx.modal.open();
        true
    }

    /// Validate the dialog inputs and start the export call.
    pub fn confirm<D: Dispatch>(
        &mut self,
        repository_url: &str,
        token: &str,
        ctx: &mut Workspace,
        dispatch: &D,
        now: Instant,
    ) -> Option<RequestId> {
        let repository_url = repository_url.trim();
        let token = token.trim();
        if repository_url.is_empty() || token.is_empty() {
            ctx.notifications.notify(FIELDS_MISSING, Severity::Warning, now);
            return None;
        }
        if !ctx.state.has_document() {
            ctx.notifications
                .notify(NOTHING_TO_EXPORT, Severity::Warning, now);
            return None;
        }

        ctx.modal.close();
        ctx.loading.begin(BusyCall::Export);

        let id = self.tasks.next_id();
        tracing::info!(request = id.0, repository = %repository_url, "exporting README");

        let request = ExportRequest {
            repository_url: repository_url.to_string(),
            readme_content: ctx.state.current_document().to_string(),
            github_token: token.to_string(),
        };
        let api = Arc::clone(&self.api);
        let task = Task::spawn(
            id,
            "export",
            dispatch.clone(),
            move || api.export(&request),
            move |outcome| Message::ExportFinished(id, outcome),
        );
        self.tasks.track(task);
        self.targets.insert(id, repository_url.to_string());
        Some(id)
    }

    /// Apply a finished export. Returns true on success.
    ///
    /// The token is cleared only after a successful export; a failed attempt
    /// keeps it so the user can retry.
    pub fn finish(
        &mut self,
        id: RequestId,
        outcome: CallOutcome<ApiReply>,
        ctx: &mut Workspace,
        now: Instant,
    ) -> bool {
        self.tasks.finish(id);
        let target = self.targets.remove(&id);
        ctx.loading.end(BusyCall::Export);

        match outcome {
            CallOutcome::Completed(reply) if reply.is_success() => {
                tracing::info!(request = id.0, "export succeeded");
                let message = reply
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| EXPORTED.to_string());
                ctx.notifications.notify(message, Severity::Success, now);
                ctx.export_fields.token.clear();
                if target.is_some() {
                    self.last_exported = target;
                }
                true
            }
            CallOutcome::Completed(reply) => {
                let reason = reply
                    .failure_reason()
                    .unwrap_or_else(|| EXPORT_FAILED.to_string());
                tracing::warn!(request = id.0, status = %reply.status, %reason, "export rejected");
                ctx.notifications
                    .notify(format!("Error: {}", reason), Severity::Error, now);
                false
            }
            CallOutcome::Failed(detail) => {
                tracing::error!(request = id.0, %detail, "export call failed");
                ctx.notifications.notify(EXPORT_UNREACHABLE, Severity::Error, now);
                false
            }
            CallOutcome::Cancelled => {
                tracing::debug!(request = id.0, "export cancelled");
                false
            }
        }
    }

    /// Ask the service whether the token in the dialog is usable.
    pub fn validate_token<D: Dispatch>(
        &mut self,
        ctx: &mut Workspace,
        dispatch: &D,
        now: Instant,
    ) -> Option<RequestId> {
        let token = ctx.export_fields.token.trim().to_string();
        if token.is_empty() {
            ctx.notifications.notify(FIELDS_MISSING, Severity::Warning, now);
            return None;
        }

        let id = self.token_checks.next_id();
        tracing::debug!(request = id.0, "validating token");
        let api = Arc::clone(&self.api);
        let task = Task::spawn(
            id,
            "validate-token",
            dispatch.clone(),
            move || api.validate_token(&token),
            move |outcome| Message::TokenValidated(id, outcome),
        );
        self.token_checks.track(task);
        Some(id)
    }

    pub fn token_validated(
        &mut self,
        id: RequestId,
        outcome: CallOutcome<bool>,
        ctx: &mut Workspace,
        now: Instant,
    ) {
        self.token_checks.finish(id);
        match outcome {
            CallOutcome::Completed(true) => {
                ctx.notifications.notify(TOKEN_VALID, Severity::Success, now)
            }
            CallOutcome::Completed(false) => {
                ctx.notifications.notify(TOKEN_INVALID, Severity::Warning, now)
            }
            CallOutcome::Failed(detail) => {
                tracing::warn!(request = id.0, %detail, "token validation failed");
                ctx.notifications.notify(TOKEN_UNCHECKED, Severity::Error, now);
            }
            CallOutcome::Cancelled => {}
        }
    }

    pub fn last_exported(&self) -> Option<&str> {
        self.last_exported.as_deref()
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.in_flight()
    }

    pub fn cancel_all(&self) {
        self.tasks.cancel_all();
        self.token_checks.cancel_all();
    }
}
