use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{Message, PreviewMode};

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Save README As...", Shortcut::Ctrl | 's', MenuFlag::Normal, {
        let s = *s;
        move |_| {
            if let Some(path) = super::file_dialogs::native_save_dialog("Markdown", "*.md") {
                s.send(Message::DownloadDocument(path));
            }
        }
    });
    menu.add("File/Restore Draft", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::RestoreDraft) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // README
    menu.add("README/Generate", Shortcut::Ctrl | Key::Enter, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Generate) });
    menu.add("README/Copy to Clipboard", Shortcut::Ctrl | Shortcut::Shift | 'c', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::CopyDocument) });
    menu.add("README/Export to GitHub...", Shortcut::Ctrl | 'e', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenExportDialog) });
    menu.add("README/Open Repository Page", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenRepositoryPage) });

    // View
    menu.add("View/Rendered", Shortcut::Ctrl | '1', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PreviewModeSelected(PreviewMode::Rendered)) });
    menu.add("View/Raw Markdown", Shortcut::Ctrl | '2', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PreviewModeSelected(PreviewMode::Raw)) });
}
