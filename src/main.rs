use std::sync::Arc;
use std::time::Instant;

use fltk::{
    app,
    enums::{Event, Key},
    prelude::*,
};
use tracing_subscriber::EnvFilter;

use readme_forge::app::domain::{AppSettings, ClickTarget, Message};
use readme_forge::app::services::api::HttpApi;
use readme_forge::app::services::draft_store::FileDraftStore;
use readme_forge::app::session::Session;
use readme_forge::ui::dialogs::export::ExportDialog;
use readme_forge::ui::main_window::build_main_window;
use readme_forge::ui::menu::build_menu;
use readme_forge::ui::theme::apply_theme;
use readme_forge::ui::view::FltkView;

/// Interval between housekeeping ticks (notification dismiss, draft autosave).
const TICK_SECS: f64 = 0.1;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = AppSettings::load();
    let api = HttpApi::from_settings(&settings).unwrap_or_else(|e| {
        tracing::error!(error = %e, "invalid service configuration, using the default URL");
        HttpApi::new(AppSettings::default().api_base_url, settings.request_timeout_secs)
    });
    let store = FileDraftStore::default_location();
    tracing::info!(draft = %store.path().display(), settings = %AppSettings::get_config_path().display(), "starting ReadmeForge");

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(sender);
    build_menu(&mut widgets.menu, &sender);
    let mut dialog = ExportDialog::new(sender);
    let is_dark = settings.is_dark();
    apply_theme(&mut widgets, &mut dialog, is_dark);

    // Escape closes the export dialog; clicks on the main window while the
    // dialog is up count as backdrop clicks.
    let dialog_window = dialog.window.clone();
    widgets.wind.set_callback(move |_| {
        if app::event() == Event::Close {
            sender.send(Message::Quit);
        } else if app::event_key() == Key::Escape {
            sender.send(Message::EscapePressed);
        }
    });
    widgets.wind.handle(move |_, ev| {
        if ev == Event::Push && dialog_window.shown() {
            sender.send(Message::ExportDialogClicked(ClickTarget::Backdrop));
            return true;
        }
        false
    });

    let mut wind = widgets.wind.clone();
    let view = FltkView::new(widgets, dialog, is_dark);
    let mut session = Session::new(Arc::new(api), Box::new(store), &settings, view, sender);

    wind.show();
    session.start();

    app::add_timeout3(TICK_SECS, move |handle| {
        sender.send(Message::Tick);
        app::repeat_timeout3(TICK_SECS, handle);
    });

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if !session.handle(msg, Instant::now()) {
                session.view_mut().dialog.window.hide();
                wind.hide();
                break;
            }
        }
    }
}
