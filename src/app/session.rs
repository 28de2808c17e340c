use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::app::controllers::export::ExportController;
use crate::app::controllers::generation::{GenerationController, GenerationResult};
use crate::app::controllers::notification::Severity;
use crate::app::controllers::persistence::PersistenceBridge;
use crate::app::controllers::preview::PreviewRenderer;
use crate::app::controllers::tags::TagListEditor;
use crate::app::domain::{
    AppSettings, CallOutcome, DraftSnapshot, Message, RequestId, TemplateCatalog,
};
use crate::app::infrastructure::dispatch::Dispatch;
use crate::app::services::api::ReadmeApi;
use crate::app::services::draft_store::DraftStore;
use crate::app::services::task::Task;
use crate::app::view::View;
use crate::app::workspace::{Workspace, merge_options};

pub const COPIED: &str = "README copied to clipboard!";
pub const DOWNLOADED: &str = "README downloaded!";
pub const NO_DOCUMENT: &str = "Generate a README first";
pub const NOTHING_EXPORTED: &str = "Export a README to open its repository";

/// Main application coordinator.
///
/// Owns the per-window `Workspace` and every controller. All state changes
/// go through `handle`; after each change the affected parts of the view are
/// redrawn from state.
pub struct Session<V: View, D: Dispatch> {
    ws: Workspace,
    view: V,
    dispatch: D,
    api: Arc<dyn ReadmeApi>,
    tags: TagListEditor,
    preview: PreviewRenderer,
    generation: GenerationController,
    export: ExportController,
    persistence: PersistenceBridge,
    catalog: Option<Task>,
    restore_draft: bool,
}

impl<V: View, D: Dispatch> Session<V, D> {
    pub fn new(
        api: Arc<dyn ReadmeApi>,
        store: Box<dyn DraftStore>,
        settings: &AppSettings,
        view: V,
        dispatch: D,
    ) -> Self {
        Self {
            ws: Workspace::new(),
            view,
            dispatch,
            generation: GenerationController::new(Arc::clone(&api)),
            export: ExportController::new(Arc::clone(&api)),
            api,
            tags: TagListEditor::new(),
            preview: PreviewRenderer::default(),
            persistence: PersistenceBridge::new(store, settings.autosave_enabled),
            catalog: None,
            restore_draft: settings.restore_draft,
        }
    }

    /// Use a different markdown converter for the rendered preview.
    pub fn with_preview(mut self, preview: PreviewRenderer) -> Self {
        self.preview = preview;
        self
    }

    /// Draw the initial view, fetch the template catalog and bring back the
    /// saved draft.
    pub fn start(&mut self) {
        self.render_all();
        self.load_templates();
        if self.restore_draft {
            self.restore();
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.ws
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Apply one message. Returns false once the session should end.
    pub fn handle(&mut self, msg: Message, now: Instant) -> bool {
        match msg {
            Message::FieldChanged(field, value) => {
                self.ws.form.set_field(field, value);
                self.persistence.input_changed(now);
            }
            Message::FlagToggled(flag, enabled) => {
                self.ws.form.set_flag(flag, enabled);
                self.persistence.input_changed(now);
            }
            Message::TemplateSelected(template) => {
                self.ws.form.template_type = template;
                self.persistence.input_changed(now);
            }
            Message::TechnologyEntered(text) => {
                if self.tags.add(&mut self.ws.state.technologies, &text) {
                    self.view.clear_technology_input();
                    self.render_tags();
                    self.persistence.input_changed(now);
                }
            }
            Message::TechnologyRemoved(index) => {
                if self.tags.remove_at(&mut self.ws.state.technologies, index) {
                    self.render_tags();
                    self.persistence.input_changed(now);
                }
            }

            Message::Generate => self.generate(now),
            Message::GenerationFinished(id, outcome) => {
                let result = self.generation.finish(id, outcome, &mut self.ws, now);
                if result == GenerationResult::Applied {
                    self.render_preview();
                    self.view.set_actions_visible(self.ws.actions_visible);
                }
                self.render_loading();
                self.render_notification();
            }

            Message::PreviewModeSelected(mode) => {
                self.ws.state.preview_mode = mode;
                self.view.set_active_tab(mode);
                self.render_preview();
            }

            Message::CopyDocument => self.copy_document(now),
            Message::DownloadDocument(path) => self.download_document(&path, now),

            Message::OpenExportDialog => {
                if self.export.open_dialog(&mut self.ws, now) {
                    self.render_export_fields();
                    self.view.set_dialog_open(true);
                }
                self.render_notification();
            }
            Message::CloseExportDialog(trigger) => {
                tracing::debug!(?trigger, "closing export dialog");
                self.close_dialog();
            }
            Message::ExportDialogClicked(target) => {
                if self.ws.modal.handle_click(target) {
                    self.view.set_dialog_open(false);
                }
            }
            Message::ExportUrlChanged(url) => self.ws.export_fields.repository_url = url,
            Message::ExportTokenChanged(token) => self.ws.export_fields.token = token,
            Message::ConfirmExport => {
                let fields = self.ws.export_fields.clone();
                let started = self.export.confirm(
                    &fields.repository_url,
                    &fields.token,
                    &mut self.ws,
                    &self.dispatch,
                    now,
                );
                if started.is_some() {
                    self.view.set_dialog_open(false);
                    self.render_loading();
                }
                self.render_notification();
            }
            Message::ExportFinished(id, outcome) => {
                self.export.finish(id, outcome, &mut self.ws, now);
                self.render_export_fields();
                self.render_loading();
                self.render_notification();
            }
            Message::ValidateToken => {
                self.export.validate_token(&mut self.ws, &self.dispatch, now);
                self.render_notification();
            }
            Message::TokenValidated(id, outcome) => {
                self.export.token_validated(id, outcome, &mut self.ws, now);
                self.render_notification();
            }
            Message::OpenRepositoryPage => self.open_repository_page(now),

            Message::EscapePressed => self.close_dialog(),

            Message::TemplatesLoaded(outcome) => self.templates_loaded(outcome),
            Message::RestoreDraft => self.restore(),
            Message::Tick => self.tick(now),
            Message::Quit => {
                self.shutdown();
                return false;
            }
        }
        true
    }

    /// Fire whichever timers are due.
    pub fn tick(&mut self, now: Instant) {
        if self.ws.notifications.tick(now) {
            self.render_notification();
        }
        self.persistence
            .tick(now, &self.ws.form, self.ws.state.technologies.as_slice());
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.ws.notifications.next_deadline(), self.persistence.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Save a pending draft and abandon running calls.
    pub fn shutdown(&mut self) {
        if let Err(e) = self
            .persistence
            .flush(&self.ws.form, self.ws.state.technologies.as_slice())
        {
            tracing::warn!(error = %e, "failed to save draft on exit");
        }
        self.generation.cancel_all();
        self.export.cancel_all();
        if let Some(task) = self.catalog.take() {
            task.cancel();
        }
        tracing::info!("session closed");
    }

    fn generate(&mut self, now: Instant) {
        let missing = self.ws.form.missing_required();
        if !missing.is_empty() {
            let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            self.ws.notifications.notify(
                format!("Please fill in: {}", labels.join(", ")),
                Severity::Warning,
                now,
            );
            self.render_notification();
            return;
        }

        let snapshot = self
            .ws
            .form
            .snapshot(self.ws.state.technologies.as_slice());
        self.generation.generate(snapshot, &mut self.ws, &self.dispatch);
        self.render_loading();
    }

    fn copy_document(&mut self, now: Instant) {
        if !self.ws.state.has_document() {
            self.ws.notifications.notify(NO_DOCUMENT, Severity::Warning, now);
        } else {
            match self.view.copy_to_clipboard(self.ws.state.current_document()) {
                Ok(()) => self.ws.notifications.notify(COPIED, Severity::Success, now),
                Err(e) => {
                    tracing::warn!(error = %e, "copy failed");
                    self.ws
                        .notifications
                        .notify(format!("Error: {}", e), Severity::Error, now);
                }
            }
        }
        self.render_notification();
    }

    fn download_document(&mut self, path: &Path, now: Instant) {
        if !self.ws.state.has_document() {
            self.ws.notifications.notify(NO_DOCUMENT, Severity::Warning, now);
        } else {
            match fs::write(path, self.ws.state.current_document()) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "README saved");
                    self.ws.notifications.notify(DOWNLOADED, Severity::Success, now);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "saving README failed");
                    self.ws.notifications.notify(
                        format!("Error: could not save {}: {}", path.display(), e),
                        Severity::Error,
                        now,
                    );
                }
            }
        }
        self.render_notification();
    }

    fn open_repository_page(&mut self, now: Instant) {
        let Some(url) = self.export.last_exported().map(str::to_string) else {
            self.ws
                .notifications
                .notify(NOTHING_EXPORTED, Severity::Warning, now);
            self.render_notification();
            return;
        };
        if let Err(e) = open::that(&url) {
            tracing::warn!(%url, error = %e, "failed to open browser");
            self.ws.notifications.notify(
                format!("Error: could not open {}", url),
                Severity::Error,
                now,
            );
            self.render_notification();
        }
    }

    fn close_dialog(&mut self) {
        if self.ws.modal.close() {
            self.view.set_dialog_open(false);
        }
    }

    fn load_templates(&mut self) {
        let api = Arc::clone(&self.api);
        self.catalog = Some(Task::spawn(
            RequestId(0),
            "templates",
            self.dispatch.clone(),
            move || api.templates(),
            Message::TemplatesLoaded,
        ));
    }

    fn templates_loaded(&mut self, outcome: CallOutcome<TemplateCatalog>) {
        self.catalog = None;
        match outcome {
            CallOutcome::Completed(catalog) => {
                if merge_options(&mut self.ws.license_options, &catalog.licenses) {
                    self.view.set_license_options(&self.ws.license_options);
                }
                if merge_options(&mut self.ws.technology_suggestions, &catalog.technologies) {
                    self.view
                        .set_technology_suggestions(&self.ws.technology_suggestions);
                }
                tracing::debug!(
                    licenses = self.ws.license_options.len(),
                    suggestions = self.ws.technology_suggestions.len(),
                    "template catalog loaded"
                );
            }
            CallOutcome::Failed(detail) => {
                tracing::info!(%detail, "template catalog unavailable, using defaults");
            }
            CallOutcome::Cancelled => {}
        }
    }

    /// Bring back the saved draft. Only non-empty values overwrite the form.
    fn restore(&mut self) {
        let Some(DraftSnapshot {
            project_name,
            description,
            technologies,
        }) = self.persistence.restore()
        else {
            return;
        };

        if !project_name.is_empty() {
            self.ws.form.project_name = project_name;
        }
        if !description.is_empty() {
            self.ws.form.description = description;
        }
        if !technologies.is_empty() {
            self.tags
                .replace_all(&mut self.ws.state.technologies, &technologies);
        }
        tracing::info!(tags = self.ws.state.technologies.len(), "draft restored");
        self.view.set_form(&self.ws.form);
        self.render_tags();
    }

    fn render_all(&mut self) {
        self.view.set_license_options(&self.ws.license_options);
        self.view.set_form(&self.ws.form);
        self.view
            .set_technology_suggestions(&self.ws.technology_suggestions);
        self.render_tags();
        self.view.set_active_tab(self.ws.state.preview_mode);
        self.render_preview();
        self.view.set_actions_visible(self.ws.actions_visible);
        self.render_loading();
        self.render_notification();
        self.render_export_fields();
        self.view.set_dialog_open(self.ws.modal.is_open());
    }

    fn render_tags(&mut self) {
        self.view
            .render_tags(self.ws.state.technologies.as_slice(), self.tags.payload());
    }

    fn render_preview(&mut self) {
        if let Some(html) = self.preview.render(&self.ws.state) {
            self.view.render_preview(&html);
        }
    }

    fn render_loading(&mut self) {
        self.view.set_loading(self.ws.loading.label());
    }

    fn render_notification(&mut self) {
        self.view.render_notification(self.ws.notifications.current());
    }

    fn render_export_fields(&mut self) {
        self.view.set_export_fields(
            &self.ws.export_fields.repository_url,
            &self.ws.export_fields.token,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controllers::notification::NOTIFICATION_TIMEOUT;
    use crate::app::controllers::persistence::AUTOSAVE_DELAY;
    use crate::app::domain::{ApiReply, ClickTarget, CloseTrigger, FormField, PreviewMode};
    use crate::app::services::draft_store::MemoryDraftStore;
    use crate::app::testing::{FakeApi, RecordingView, next_message};
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::Duration;

    type TestSession = Session<RecordingView, Sender<Message>>;

    struct Harness {
        session: TestSession,
        rx: Receiver<Message>,
        api: Arc<FakeApi>,
        store: MemoryDraftStore,
        now: Instant,
    }

    impl Harness {
        fn new(api: FakeApi) -> Self {
            Self::with_store(api, MemoryDraftStore::new())
        }

        fn with_store(api: FakeApi, store: MemoryDraftStore) -> Self {
            let api = Arc::new(api);
            let (tx, rx) = mpsc::channel();
            let session = Session::new(
                api.clone(),
                Box::new(store.clone()),
                &AppSettings::default(),
                RecordingView::default(),
                tx,
            );
            Self {
                session,
                rx,
                api,
                store,
                now: Instant::now(),
            }
        }

        /// Start the session and apply the template catalog reply.
        fn started(mut self) -> Self {
            self.session.start();
            self.pump();
            self
        }

        fn send(&mut self, msg: Message) -> bool {
            self.session.handle(msg, self.now)
        }

        /// Deliver the next background completion.
        fn pump(&mut self) {
            let msg = next_message(&self.rx);
            self.send(msg);
        }

        fn fill_required(&mut self) {
            self.send(Message::FieldChanged(FormField::ProjectName, "forge".to_string()));
            self.send(Message::FieldChanged(FormField::Description, "Makes READMEs".to_string()));
        }

        fn generated(mut self, markdown: &str) -> Self {
            self.fill_required();
            self.send(Message::Generate);
            self.pump();
            assert_eq!(self.session.workspace().state.current_document(), markdown);
            self
        }

        fn view(&self) -> &RecordingView {
            self.session.view()
        }

        fn notification(&self) -> String {
            self.view()
                .notification
                .as_ref()
                .map(|n| n.message.clone())
                .unwrap_or_default()
        }
    }

    fn catalog() -> TemplateCatalog {
        TemplateCatalog {
            types: vec!["API".to_string()],
            technologies: vec!["Rust".to_string(), "React".to_string()],
            licenses: vec!["MIT".to_string(), "BSD-3-Clause".to_string()],
        }
    }

    #[test]
    fn test_start_renders_and_merges_catalog() {
        let h = Harness::new(FakeApi::new().with_templates(Ok(catalog()))).started();

        assert_eq!(h.view().licenses, vec!["MIT", "Apache-2.0", "GPL-3.0", "BSD-3-Clause"]);
        assert_eq!(h.view().suggestions, vec!["Rust", "React"]);
        assert_eq!(h.view().payload, "[]");
        assert_eq!(h.view().active_tab, Some(PreviewMode::Rendered));
        assert!(!h.view().actions_visible);
        assert!(h.view().preview.is_none());
    }

    #[test]
    fn test_catalog_failure_keeps_defaults() {
        let h = Harness::new(FakeApi::new()).started();
        assert_eq!(h.view().licenses, vec!["MIT", "Apache-2.0", "GPL-3.0"]);
        assert!(h.view().notification.is_none());
    }

    #[test]
    fn test_tag_edits_render_and_serialize() {
        let mut h = Harness::new(FakeApi::new()).started();

        h.send(Message::TechnologyEntered("  Rust ".to_string()));
        h.send(Message::TechnologyEntered("react".to_string()));
        h.send(Message::TechnologyEntered("react".to_string()));
        h.send(Message::TechnologyEntered("   ".to_string()));

        assert_eq!(h.view().tags, vec!["Rust", "react"]);
        assert_eq!(h.view().payload, r#"["Rust","react"]"#);
        assert_eq!(h.view().tech_input_cleared, 2);

        h.send(Message::TechnologyRemoved(0));
        h.send(Message::TechnologyRemoved(7));
        assert_eq!(h.view().tags, vec!["react"]);
        assert_eq!(h.view().payload, r#"["react"]"#);
    }

    #[test]
    fn test_generate_success_flow() {
        let mut h = Harness::new(FakeApi::new().with_generate(Ok(ApiReply::success("# Hello")))).started();
        h.fill_required();
        h.send(Message::TechnologyEntered("Rust".to_string()));

        h.send(Message::Generate);
        assert_eq!(h.view().loading_label.as_deref(), Some("Generating..."));

        h.pump();
        assert!(!h.view().loading);
        assert!(h.view().actions_visible);
        assert_eq!(h.session.workspace().state.current_document(), "# Hello");
        assert!(h.view().preview.as_deref().unwrap().contains("<h1>Hello</h1>"));
        assert_eq!(h.notification(), "README generated successfully!");

        let calls = h.api.generate_calls.lock().unwrap();
        assert_eq!(calls[0].project_name, "forge");
        assert_eq!(calls[0].technologies, vec!["Rust"]);
    }

    #[test]
    fn test_generate_error_keeps_document() {
        let api = FakeApi::new()
            .with_generate(Ok(ApiReply::success("# First")))
            .with_generate(Ok(ApiReply::error("bad input")));
        let mut h = Harness::new(api).started().generated("# First");
        let renders = h.view().preview_renders;

        h.send(Message::Generate);
        h.pump();

        assert_eq!(h.session.workspace().state.current_document(), "# First");
        assert!(h.notification().contains("bad input"));
        assert_eq!(h.view().preview_renders, renders);
        assert!(!h.view().loading);
    }

    #[test]
    fn test_generate_requires_name_and_description() {
        let mut h = Harness::new(FakeApi::new()).started();
        h.send(Message::FieldChanged(FormField::ProjectName, "forge".to_string()));

        h.send(Message::Generate);

        assert_eq!(h.notification(), "Please fill in: Description");
        assert_eq!(h.api.generate_count(), 0);
        assert!(!h.view().loading);
    }

    #[test]
    fn test_edits_while_generation_in_flight() {
        let mut h = Harness::new(FakeApi::new().with_generate(Ok(ApiReply::success("# Hi")))).started();
        h.fill_required();
        h.send(Message::Generate);

        h.send(Message::TechnologyEntered("Go".to_string()));
        h.send(Message::PreviewModeSelected(PreviewMode::Raw));
        assert_eq!(h.view().active_tab, Some(PreviewMode::Raw));
        assert!(h.view().preview.is_none());

        h.pump();
        assert_eq!(h.view().tags, vec!["Go"]);
        assert_eq!(h.view().preview.as_deref(), Some("<pre><code># Hi</code></pre>"));
    }

    fn reply_markdown(msg: &Message) -> String {
        match msg {
            Message::GenerationFinished(_, CallOutcome::Completed(reply)) => {
                reply.markdown.clone().unwrap()
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    /// Start two generations and hand back both completions in channel order.
    fn double_submission() -> (Harness, Message, Message) {
        let api = FakeApi::new()
            .with_generate(Ok(ApiReply::success("# One")))
            .with_generate(Ok(ApiReply::success("# Two")));
        let mut h = Harness::new(api).started();
        h.fill_required();

        h.send(Message::Generate);
        h.send(Message::Generate);
        assert!(h.view().loading);
        assert_eq!(h.api.generate_count(), 2);

        let first = next_message(&h.rx);
        let second = next_message(&h.rx);
        assert_ne!(reply_markdown(&first), reply_markdown(&second));
        (h, first, second)
    }

    #[test]
    fn test_double_submission_applies_in_arrival_order() {
        let (mut h, first, second) = double_submission();
        let expected = reply_markdown(&second);

        h.send(first);
        assert!(h.view().loading);
        h.send(second);
        assert!(!h.view().loading);
        assert_eq!(h.session.workspace().state.current_document(), expected);
    }

    #[test]
    fn test_double_submission_later_arrival_wins() {
        let (mut h, first, second) = double_submission();
        let expected = reply_markdown(&first);

        h.send(second);
        assert!(h.view().loading);
        h.send(first);
        assert!(!h.view().loading);
        assert_eq!(h.session.workspace().state.current_document(), expected);
    }

    #[test]
    fn test_mode_switch_round_trip() {
        let api = FakeApi::new().with_generate(Ok(ApiReply::success("# Hello\n\n<b>x</b>")));
        let mut h = Harness::new(api).started().generated("# Hello\n\n<b>x</b>");
        let rendered = h.view().preview.clone().unwrap();

        h.send(Message::PreviewModeSelected(PreviewMode::Raw));
        let raw = h.view().preview.clone().unwrap();
        assert!(raw.contains("&lt;b&gt;x&lt;/b&gt;"));

        h.send(Message::PreviewModeSelected(PreviewMode::Rendered));
        assert_eq!(h.view().preview.clone().unwrap(), rendered);
        assert_eq!(h.api.generate_count(), 1);
    }

    #[test]
    fn test_injected_markdown_converter() {
        let mut h = Harness::new(FakeApi::new().with_generate(Ok(ApiReply::success("# Doc"))));
        h.session = h
            .session
            .with_preview(PreviewRenderer::new(|md| format!("<converted>{}</converted>", md.len())));
        let h = h.started().generated("# Doc");

        assert_eq!(
            h.view().preview.as_deref(),
            Some("<div class=\"markdown-preview\">\n<converted>5</converted></div>")
        );
    }

    #[test]
    fn test_copy_and_download() {
        let api = FakeApi::new().with_generate(Ok(ApiReply::success("# Saved")));
        let mut h = Harness::new(api).started().generated("# Saved");

        h.send(Message::CopyDocument);
        assert_eq!(h.view().clipboard.as_deref(), Some("# Saved"));
        assert_eq!(h.notification(), COPIED);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        h.send(Message::DownloadDocument(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Saved");
        assert_eq!(h.notification(), DOWNLOADED);

        let missing = dir.path().join("no-such-dir").join("README.md");
        h.send(Message::DownloadDocument(missing));
        assert_eq!(h.view().notification.as_ref().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_copy_failure_reports_error() {
        let api = FakeApi::new().with_generate(Ok(ApiReply::success("# Doc")));
        let mut h = Harness::new(api).started().generated("# Doc");
        h.session.view_mut().clipboard_fails = true;

        h.send(Message::CopyDocument);
        assert_eq!(h.view().notification.as_ref().unwrap().severity, Severity::Error);
        assert_eq!(h.notification(), "Error: Clipboard error: clipboard unavailable");
        assert!(h.view().clipboard.is_none());
    }

    #[test]
    fn test_copy_without_document_warns() {
        let mut h = Harness::new(FakeApi::new()).started();
        h.send(Message::CopyDocument);
        assert_eq!(h.notification(), NO_DOCUMENT);
        assert!(h.view().clipboard.is_none());
    }

    #[test]
    fn test_export_dialog_lifecycle() {
        let api = FakeApi::new().with_generate(Ok(ApiReply::success("# Doc")));
        let mut h = Harness::new(api).started().generated("# Doc");
        h.send(Message::FieldChanged(
            FormField::RepositoryUrl,
            "https://github.com/acme/forge".to_string(),
        ));

        h.send(Message::OpenExportDialog);
        assert!(h.view().dialog_open);
        assert_eq!(h.view().export_url, "https://github.com/acme/forge");

        h.send(Message::ExportDialogClicked(ClickTarget::Content));
        assert!(h.view().dialog_open);
        h.send(Message::ExportDialogClicked(ClickTarget::Backdrop));
        assert!(!h.view().dialog_open);

        h.send(Message::OpenExportDialog);
        h.send(Message::CloseExportDialog(CloseTrigger::CancelButton));
        assert!(!h.view().dialog_open);

        h.send(Message::OpenExportDialog);
        h.send(Message::EscapePressed);
        assert!(!h.session.workspace().modal.is_open());
        assert!(!h.view().dialog_open);

        h.send(Message::EscapePressed);
        assert!(!h.view().dialog_open);
    }

    #[test]
    fn test_escape_with_dialog_closed_is_noop() {
        let mut h = Harness::new(FakeApi::new()).started();
        h.session.view_mut().dialog_open = true;
        assert!(h.send(Message::EscapePressed));
        assert!(h.view().dialog_open);
        assert!(h.view().notification.is_none());
    }

    #[test]
    fn test_export_success_clears_token() {
        let api = FakeApi::new()
            .with_generate(Ok(ApiReply::success("# Doc")))
            .with_export(Ok(ApiReply::success("")));
        let mut h = Harness::new(api).started().generated("# Doc");

        h.send(Message::OpenExportDialog);
        h.send(Message::ExportUrlChanged("https://github.com/acme/forge".to_string()));
        h.send(Message::ExportTokenChanged("ghp_secret".to_string()));
        h.send(Message::ConfirmExport);
        assert!(!h.view().dialog_open);
        assert_eq!(h.view().loading_label.as_deref(), Some("Exporting..."));

        h.pump();
        assert!(!h.view().loading);
        assert_eq!(h.view().loading_label, None);
        assert_eq!(h.view().export_token, "");
        assert_eq!(h.view().export_url, "https://github.com/acme/forge");
        assert_eq!(h.notification(), "README exported to GitHub successfully!");
        assert_eq!(h.api.export_calls.lock().unwrap()[0].readme_content, "# Doc");
    }

    #[test]
    fn test_export_failure_keeps_token() {
        let api = FakeApi::new()
            .with_generate(Ok(ApiReply::success("# Doc")))
            .with_export(Ok(ApiReply::error("Bad credentials")));
        let mut h = Harness::new(api).started().generated("# Doc");

        h.send(Message::OpenExportDialog);
        h.send(Message::ExportUrlChanged("https://github.com/acme/forge".to_string()));
        h.send(Message::ExportTokenChanged("ghp_secret".to_string()));
        h.send(Message::ConfirmExport);
        h.pump();

        assert_eq!(h.view().export_token, "ghp_secret");
        assert!(h.notification().contains("Bad credentials"));
    }

    #[test]
    fn test_export_with_blank_fields_makes_no_call() {
        let api = FakeApi::new().with_generate(Ok(ApiReply::success("# Doc")));
        let mut h = Harness::new(api).started().generated("# Doc");

        h.send(Message::OpenExportDialog);
        h.send(Message::ExportTokenChanged("tok".to_string()));
        h.send(Message::ConfirmExport);

        assert!(h.view().dialog_open);
        assert!(!h.view().loading);
        assert_eq!(h.notification(), "Please fill in all fields");
        assert_eq!(h.api.export_count(), 0);
    }

    #[test]
    fn test_open_repository_page_before_export_warns() {
        let mut h = Harness::new(FakeApi::new()).started();
        h.send(Message::OpenRepositoryPage);
        assert_eq!(h.notification(), NOTHING_EXPORTED);
    }

    #[test]
    fn test_notification_dismissed_by_tick() {
        let mut h = Harness::new(FakeApi::new()).started();
        h.send(Message::CopyDocument);
        assert!(h.view().notification.is_some());

        h.session.tick(h.now + NOTIFICATION_TIMEOUT - Duration::from_millis(1));
        assert!(h.view().notification.is_some());
        h.session.tick(h.now + NOTIFICATION_TIMEOUT);
        assert!(h.view().notification.is_none());
    }

    #[test]
    fn test_draft_autosave_after_quiet_period() {
        let mut h = Harness::new(FakeApi::new()).started();
        h.send(Message::FieldChanged(FormField::ProjectName, "forge".to_string()));
        h.send(Message::TechnologyEntered("Rust".to_string()));
        assert_eq!(h.session.next_deadline(), Some(h.now + AUTOSAVE_DELAY));

        h.session.tick(h.now + Duration::from_millis(500));
        assert!(h.store.contents().is_none());

        h.session.tick(h.now + AUTOSAVE_DELAY);
        let saved = h.store.contents().unwrap();
        assert!(saved.contains("\"projectName\":\"forge\""));
        assert!(saved.contains("\"technologies\":[\"Rust\"]"));
    }

    #[test]
    fn test_restore_on_start() {
        let store = MemoryDraftStore::with_contents(
            r#"{"projectName":"forge","description":"","technologies":["Rust","Rust","Go"]}"#,
        );
        let h = Harness::with_store(FakeApi::new(), store).started();

        let form = h.view().form.as_ref().unwrap();
        assert_eq!(form.project_name, "forge");
        assert_eq!(form.description, "");
        assert_eq!(h.view().tags, vec!["Rust", "Go"]);
        assert_eq!(h.view().payload, r#"["Rust","Go"]"#);
    }

    #[test]
    fn test_malformed_draft_is_ignored() {
        let store = MemoryDraftStore::with_contents("{broken");
        let h = Harness::with_store(FakeApi::new(), store).started();
        assert!(h.view().tags.is_empty());
        assert!(h.view().notification.is_none());
    }

    #[test]
    fn test_quit_flushes_draft() {
        let mut h = Harness::new(FakeApi::new()).started();
        h.send(Message::FieldChanged(FormField::Description, "unsaved".to_string()));

        assert!(!h.send(Message::Quit));
        assert!(h.store.contents().unwrap().contains("unsaved"));
    }
}
