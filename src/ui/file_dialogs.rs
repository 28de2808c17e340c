use std::path::PathBuf;

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

/// Ask where to save the README. None if the user cancelled.
pub fn native_save_dialog(description: &str, pattern: &str) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title("Save README");
    nfc.set_filter(&format!("{}\t{}", description, pattern));
    nfc.set_preset_file("README.md");
    nfc.set_option(FileDialogOptions::SaveAsConfirm);
    nfc.show();
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}
