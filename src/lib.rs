//! ReadmeForge: fill in a project form, get a README back from the
//! generation service, preview it, then copy, save or push it to GitHub.

pub mod app;

#[cfg(feature = "gui")]
pub mod ui;
