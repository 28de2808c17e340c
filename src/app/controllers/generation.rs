use std::sync::Arc;
use std::time::Instant;

use super::loading::BusyCall;
use super::notification::Severity;
use crate::app::domain::{ApiReply, CallOutcome, FormSnapshot, Message, RequestId};
use crate::app::infrastructure::dispatch::Dispatch;
use crate::app::services::api::ReadmeApi;
use crate::app::services::task::{Task, TaskSet};
use crate::app::workspace::Workspace;

pub const GENERATED: &str = "README generated successfully!";
pub const GENERATION_FAILED: &str = "Generation failed";
pub const SERVER_UNREACHABLE: &str = "Could not connect to the server";

/// What a finished generation call did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationResult {
    /// The document was replaced.
    Applied,
    /// The service answered with a failure.
    Rejected,
    /// Transport or decode failure.
    Failed,
    Cancelled,
}

/// Runs the generate request/response cycle.
pub struct GenerationController {
    api: Arc<dyn ReadmeApi>,
    tasks: TaskSet,
}

impl GenerationController {
    pub fn new(api: Arc<dyn ReadmeApi>) -> Self {
        Self {
            api,
            tasks: TaskSet::new(),
        }
    }

    /// Enter the loading state and send `snapshot` to the service in the
    /// background. Calls already in flight are left alone.
    pub fn generate<D: Dispatch>(
        &mut self,
        snapshot: FormSnapshot,
        ctx: &mut Workspace,
        dispatch: &D,
    ) -> RequestId {
        ctx.loading.begin(BusyCall::Generate);
        let id = self.tasks.next_id();
        if self.tasks.in_flight() > 0 {
            tracing::warn!(
                request = id.0,
                in_flight = self.tasks.in_flight(),
                "generation requested while another is still running"
            );
        }
        tracing::info!(request = id.0, project = %snapshot.project_name, "requesting README generation");

        let api = Arc::clone(&self.api);
        let task = Task::spawn(
            id,
            "generate",
            dispatch.clone(),
            move || api.generate(&snapshot),
            move |outcome| Message::GenerationFinished(id, outcome),
        );
        self.tasks.track(task);
        id
    }

    /// Apply a finished call. The loading state is always released first.
    pub fn finish(
        &mut self,
        id: RequestId,
        outcome: CallOutcome<ApiReply>,
        ctx: &mut Workspace,
        now: Instant,
    ) -> GenerationResult {
        self.tasks.finish(id);
        ctx.loading.end(BusyCall::Generate);

        match outcome {
            CallOutcome::Completed(reply) if reply.is_success() => match reply.markdown {
                Some(markdown) => {
                    tracing::info!(request = id.0, bytes = markdown.len(), "README generated");
                    ctx.state.replace_document(markdown);
                    ctx.actions_visible = true;
                    ctx.notifications.notify(GENERATED, Severity::Success, now);
                    GenerationResult::Applied
                }
                None => {
                    tracing::warn!(request = id.0, "success reply without markdown");
                    ctx.notifications
                        .notify(format!("Error: {}", GENERATION_FAILED), Severity::Error, now);
                    GenerationResult::Rejected
                }
            },
            CallOutcome::Completed(reply) => {
                let reason = reply
                    .failure_reason()
                    .unwrap_or_else(|| GENERATION_FAILED.to_string());
                tracing::warn!(request = id.0, status = %reply.status, %reason, "generation rejected");
                ctx.notifications
                    .notify(format!("Error: {}", reason), Severity::Error, now);
                GenerationResult::Rejected
            }
            CallOutcome::Failed(detail) => {
                tracing::error!(request = id.0, %detail, "generation call failed");
                ctx.notifications.notify(SERVER_UNREACHABLE, Severity::Error, now);
                GenerationResult::Failed
            }
            CallOutcome::Cancelled => {
                tracing::debug!(request = id.0, "generation cancelled");
                GenerationResult::Cancelled
            }
        }
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.in_flight()
    }

    pub fn cancel_all(&self) {
        self.tasks.cancel_all();
    }
}
