use fltk::{
    app::{self, Sender},
    prelude::*,
};

use super::dialogs::export::ExportDialog;
use super::main_window::{MainWidgets, banner_colors, menu_label};
use crate::app::controllers::notification::Notification;
use crate::app::controllers::preview::wrap_html_for_helpview;
use crate::app::domain::{FormState, Message, PreviewMode, TemplateType};
use crate::app::infrastructure::dispatch::Dispatch;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::view::View;

const BANNER_HEIGHT: i32 = 30;

impl Dispatch for Sender<Message> {
    fn dispatch(&self, message: Message) {
        self.send(message);
        app::awake();
    }
}

/// `View` over the fltk widgets.
pub struct FltkView {
    pub widgets: MainWidgets,
    pub dialog: ExportDialog,
    is_dark: bool,
}

impl FltkView {
    pub fn new(widgets: MainWidgets, dialog: ExportDialog, is_dark: bool) -> Self {
        Self {
            widgets,
            dialog,
            is_dark,
        }
    }
}

/// fltk draws '@' as a symbol prefix in labels and browser lines.
fn plain_label(text: &str) -> String {
    text.replace('@', "@@")
}

impl View for FltkView {
    fn render_tags(&mut self, tags: &[String], _payload: &str) {
        let list = &mut self.widgets.tag_list;
        list.clear();
        for tag in tags {
            list.add(&plain_label(tag));
        }
        list.redraw();
    }

    fn clear_technology_input(&mut self) {
        self.widgets.tech_input.set_value("");
    }

    fn set_technology_suggestions(&mut self, suggestions: &[String]) {
        let input = &mut self.widgets.tech_input;
        input.clear();
        for suggestion in suggestions {
            input.add(&menu_label(suggestion));
        }
    }

    fn render_preview(&mut self, html: &str) {
        self.widgets.preview.set_value(&wrap_html_for_helpview(html));
        self.widgets.preview.redraw();
    }

    fn set_active_tab(&mut self, mode: PreviewMode) {
        self.widgets.rendered_tab.set_value(mode == PreviewMode::Rendered);
        self.widgets.raw_tab.set_value(mode == PreviewMode::Raw);
    }

    fn set_actions_visible(&mut self, visible: bool) {
        if visible {
            self.widgets.actions.show();
        } else {
            self.widgets.actions.hide();
        }
        if let Some(mut parent) = self.widgets.actions.parent() {
            parent.redraw();
        }
    }

    fn set_loading(&mut self, label: Option<&str>) {
        let frame = &mut self.widgets.loading_frame;
        match label {
            Some(label) => {
                frame.set_label(label);
                frame.show();
            }
            None => frame.hide(),
        }
    }

    fn render_notification(&mut self, notification: Option<&Notification>) {
        let banner = &mut self.widgets.notification_banner;
        match notification {
            Some(n) => {
                let (background, text) = banner_colors(n.severity, self.is_dark);
                banner.set_color(background);
                banner.set_label_color(text);
                banner.set_label(&plain_label(&n.message));
                banner.show();
                self.widgets.root.fixed(&*banner, BANNER_HEIGHT);
            }
            None => {
                banner.hide();
                self.widgets.root.fixed(&*banner, 0);
            }
        }
        self.widgets.root.layout();
        self.widgets.wind.redraw();
    }

    fn set_dialog_open(&mut self, open: bool) {
        self.dialog.set_open(open, &self.widgets.wind);
    }

    fn set_export_fields(&mut self, repository_url: &str, token: &str) {
        self.dialog.url_input.set_value(repository_url);
        self.dialog.token_input.set_value(token);
    }

    fn set_form(&mut self, form: &FormState) {
        for (field, input) in self.widgets.fields.iter_mut() {
            input.set_value(form.field(*field));
        }
        for (flag, check) in self.widgets.flags.iter_mut() {
            check.set_checked(form.flag(*flag));
        }
        let template_index = form
            .template_type
            .and_then(|t| TemplateType::all().iter().position(|x| *x == t))
            .map_or(-1, |i| i as i32);
        self.widgets.template_choice.set_value(template_index);
        let license_index = self.widgets.license_choice.find_index(&menu_label(&form.license));
        self.widgets.license_choice.set_value(license_index);
    }

    fn set_license_options(&mut self, licenses: &[String]) {
        let choice = &mut self.widgets.license_choice;
        let selected = choice.choice();
        choice.clear();
        for license in licenses {
            choice.add_choice(&menu_label(license));
        }
        let index = selected.map_or(0, |s| choice.find_index(&s).max(0));
        choice.set_value(index);
    }

    /// Fails when no window is shown to own the selection.
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        if !self.widgets.wind.shown() {
            return Err(AppError::Clipboard("no window to own the clipboard".to_string()));
        }
        app::copy(text);
        Ok(())
    }
}
