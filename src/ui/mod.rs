//! fltk front end, built with the `gui` feature.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod theme;
pub mod view;
