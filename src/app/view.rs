use crate::app::controllers::notification::Notification;
use crate::app::domain::{FormState, PreviewMode};
use crate::app::infrastructure::error::Result;

/// Everything the session can show. Implementations only display what they
/// are handed; they never write back into session state.
pub trait View {
    /// Redraw the tag row. `payload` is the same list serialized as the
    /// JSON array sent with the form.
    fn render_tags(&mut self, tags: &[String], payload: &str);
    fn clear_technology_input(&mut self);
    fn set_technology_suggestions(&mut self, suggestions: &[String]);

    fn render_preview(&mut self, html: &str);
    fn set_active_tab(&mut self, mode: PreviewMode);
    /// Copy, download and export controls.
    fn set_actions_visible(&mut self, visible: bool);
    /// Show the busy indicator with `label`, or hide it on `None`.
    fn set_loading(&mut self, label: Option<&str>);
    fn render_notification(&mut self, notification: Option<&Notification>);

    fn set_dialog_open(&mut self, open: bool);
    fn set_export_fields(&mut self, repository_url: &str, token: &str);

    fn set_form(&mut self, form: &FormState);
    fn set_license_options(&mut self, licenses: &[String]);

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;
}
