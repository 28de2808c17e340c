use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, CallbackTrigger, Event, Key},
    frame::Frame,
    input::{Input, SecretInput},
    prelude::*,
    window::Window,
};

use crate::app::domain::{CloseTrigger, Message};

/// Export-to-GitHub dialog. Built once with the main window; the session
/// decides when it is shown.
pub struct ExportDialog {
    pub window: Window,
    pub url_input: Input,
    pub token_input: SecretInput,
}

impl ExportDialog {
    pub fn new(sender: Sender<Message>) -> Self {
        let mut window = Window::default()
            .with_size(460, 210)
            .with_label("Export to GitHub");

        Frame::default()
            .with_pos(20, 15)
            .with_size(420, 20)
            .with_label("Repository URL:")
            .with_align(Align::Left | Align::Inside);
        let mut url_input = Input::default().with_pos(20, 37).with_size(420, 28);
        url_input.set_trigger(CallbackTrigger::Changed);
        url_input.set_callback(move |i| sender.send(Message::ExportUrlChanged(i.value())));

        Frame::default()
            .with_pos(20, 75)
            .with_size(420, 20)
            .with_label("GitHub personal access token:")
            .with_align(Align::Left | Align::Inside);
        let mut token_input = SecretInput::default().with_pos(20, 97).with_size(420, 28);
        token_input.set_trigger(CallbackTrigger::Changed);
        token_input.set_callback(move |i| sender.send(Message::ExportTokenChanged(i.value())));

        let mut validate_btn = Button::default()
            .with_pos(20, 155)
            .with_size(120, 30)
            .with_label("Check token");
        validate_btn.set_callback(move |_| sender.send(Message::ValidateToken));

        let mut cancel_btn = Button::default()
            .with_pos(230, 155)
            .with_size(100, 30)
            .with_label("Cancel");
        cancel_btn.set_callback(move |_| {
            sender.send(Message::CloseExportDialog(CloseTrigger::CancelButton))
        });

        let mut export_btn = Button::default()
            .with_pos(340, 155)
            .with_size(100, 30)
            .with_label("Export");
        export_btn.set_callback(move |_| sender.send(Message::ConfirmExport));

        window.end();
        window.make_resizable(false);

        // Escape and the title bar close button both land here.
        window.set_callback(move |_| {
            let trigger = if app::event() == Event::Close {
                CloseTrigger::CloseButton
            } else if app::event_key() == Key::Escape {
                CloseTrigger::Escape
            } else {
                return;
            };
            sender.send(Message::CloseExportDialog(trigger));
        });

        Self {
            window,
            url_input,
            token_input,
        }
    }

    pub fn set_open(&mut self, open: bool, parent: &Window) {
        if open {
            let x = parent.x() + (parent.w() - self.window.w()) / 2;
            let y = parent.y() + (parent.h() - self.window.h()) / 3;
            self.window.set_pos(x, y);
            self.window.show();
        } else {
            self.window.hide();
        }
    }
}
