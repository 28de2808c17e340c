//! Fakes shared by the controller and session tests.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;
use std::sync::mpsc;
use std::time::Duration;

use crate::app::controllers::notification::Notification;
use crate::app::domain::{
    ApiReply, ExportRequest, FormSnapshot, FormState, Message, PreviewMode, TemplateCatalog,
};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::api::ReadmeApi;
use crate::app::view::View;

type Scripted<T> = std::result::Result<T, String>;

fn unreachable_host(detail: &str) -> AppError {
    AppError::Io(io::Error::new(io::ErrorKind::ConnectionRefused, detail.to_string()))
}

/// Scripted stand-in for the generation service. Each call pops the next
/// scripted reply; an exhausted script behaves like an unreachable host.
#[derive(Default)]
pub struct FakeApi {
    generate_replies: Mutex<VecDeque<Scripted<ApiReply>>>,
    export_replies: Mutex<VecDeque<Scripted<ApiReply>>>,
    templates_reply: Mutex<Option<Scripted<TemplateCatalog>>>,
    token_replies: Mutex<VecDeque<Scripted<bool>>>,
    pub generate_calls: Mutex<Vec<FormSnapshot>>,
    pub export_calls: Mutex<Vec<ExportRequest>>,
    pub token_calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generate(self, reply: Scripted<ApiReply>) -> Self {
        self.generate_replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_export(self, reply: Scripted<ApiReply>) -> Self {
        self.export_replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_templates(self, reply: Scripted<TemplateCatalog>) -> Self {
        *self.templates_reply.lock().unwrap() = Some(reply);
        self
    }

    pub fn with_token(self, reply: Scripted<bool>) -> Self {
        self.token_replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn generate_count(&self) -> usize {
        self.generate_calls.lock().unwrap().len()
    }

    pub fn export_count(&self) -> usize {
        self.export_calls.lock().unwrap().len()
    }
}

impl ReadmeApi for FakeApi {
    fn generate(&self, request: &FormSnapshot) -> Result<ApiReply> {
        self.generate_calls.lock().unwrap().push(request.clone());
        match self.generate_replies.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(detail)) => Err(unreachable_host(&detail)),
            None => Err(unreachable_host("no generate reply scripted")),
        }
    }

    fn export(&self, request: &ExportRequest) -> Result<ApiReply> {
        self.export_calls.lock().unwrap().push(request.clone());
        match self.export_replies.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(detail)) => Err(unreachable_host(&detail)),
            None => Err(unreachable_host("no export reply scripted")),
        }
    }

    fn templates(&self) -> Result<TemplateCatalog> {
        match self.templates_reply.lock().unwrap().take() {
            Some(Ok(catalog)) => Ok(catalog),
            Some(Err(detail)) => Err(unreachable_host(&detail)),
            None => Err(unreachable_host("no templates reply scripted")),
        }
    }

    fn validate_token(&self, token: &str) -> Result<bool> {
        self.token_calls.lock().unwrap().push(token.to_string());
        match self.token_replies.lock().unwrap().pop_front() {
            Some(Ok(valid)) => Ok(valid),
            Some(Err(detail)) => Err(unreachable_host(&detail)),
            None => Err(unreachable_host("no token reply scripted")),
        }
    }
}

/// View that remembers the last thing it was told to show.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub tags: Vec<String>,
    pub payload: String,
    pub tag_renders: usize,
    pub tech_input_cleared: usize,
    pub suggestions: Vec<String>,
    pub preview: Option<String>,
    pub preview_renders: usize,
    pub active_tab: Option<PreviewMode>,
    pub actions_visible: bool,
    pub loading: bool,
    pub loading_label: Option<String>,
    pub notification: Option<Notification>,
    pub dialog_open: bool,
    pub export_url: String,
    pub export_token: String,
    pub form: Option<FormState>,
    pub licenses: Vec<String>,
    pub clipboard: Option<String>,
    pub clipboard_fails: bool,
}

impl View for RecordingView {
    fn render_tags(&mut self, tags: &[String], payload: &str) {
        self.tags = tags.to_vec();
        self.payload = payload.to_string();
        self.tag_renders += 1;
    }

    fn clear_technology_input(&mut self) {
        self.tech_input_cleared += 1;
    }

    fn set_technology_suggestions(&mut self, suggestions: &[String]) {
        self.suggestions = suggestions.to_vec();
    }

    fn render_preview(&mut self, html: &str) {
        self.preview = Some(html.to_string());
        self.preview_renders += 1;
    }

    fn set_active_tab(&mut self, mode: PreviewMode) {
        self.active_tab = Some(mode);
    }

    fn set_actions_visible(&mut self, visible: bool) {
        self.actions_visible = visible;
    }

    fn set_loading(&mut self, label: Option<&str>) {
        self.loading = label.is_some();
        self.loading_label = label.map(str::to_string);
    }

    fn render_notification(&mut self, notification: Option<&Notification>) {
        self.notification = notification.cloned();
    }

    fn set_dialog_open(&mut self, open: bool) {
        self.dialog_open = open;
    }

    fn set_export_fields(&mut self, repository_url: &str, token: &str) {
        self.export_url = repository_url.to_string();
        self.export_token = token.to_string();
    }

    fn set_form(&mut self, form: &FormState) {
        self.form = Some(form.clone());
    }

    fn set_license_options(&mut self, licenses: &[String]) {
        self.licenses = licenses.to_vec();
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        if self.clipboard_fails {
            return Err(AppError::Clipboard("clipboard unavailable".to_string()));
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}

/// Next message posted by a background call.
pub fn next_message(rx: &mpsc::Receiver<Message>) -> Message {
    rx.recv_timeout(Duration::from_secs(5))
        .expect("background call did not report back")
}
