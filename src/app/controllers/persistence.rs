use std::time::{Duration, Instant};

use crate::app::domain::{DraftSnapshot, FormState};
use crate::app::infrastructure::error::Result;
use crate::app::services::draft_store::DraftStore;

/// Quiet period after the last tracked edit before the draft is written.
pub const AUTOSAVE_DELAY: Duration = Duration::from_secs(1);

/// Debounced draft autosave and restore.
pub struct PersistenceBridge {
    store: Box<dyn DraftStore>,
    enabled: bool,
    deadline: Option<Instant>,
}

impl PersistenceBridge {
    pub fn new(store: Box<dyn DraftStore>, enabled: bool) -> Self {
        Self {
            store,
            enabled,
            deadline: None,
        }
    }

    /// A tracked input changed: (re)arm the debounce.
    pub fn input_changed(&mut self, now: Instant) {
        if self.enabled {
            self.deadline = Some(now + AUTOSAVE_DELAY);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Write the draft if the quiet period has elapsed. Returns true if a
    /// save was attempted.
    pub fn tick(&mut self, now: Instant, form: &FormState, technologies: &[String]) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if let Err(e) = self.save(form, technologies) {
                    tracing::warn!(error = %e, "failed to save draft");
                }
                true
            }
            _ => false,
        }
    }

    /// Write a pending draft immediately, e.g. when the window closes.
    pub fn flush(&mut self, form: &FormState, technologies: &[String]) -> Result<()> {
        if self.deadline.take().is_some() {
            self.save(form, technologies)?;
        }
        Ok(())
    }

    fn save(&mut self, form: &FormState, technologies: &[String]) -> Result<()> {
        let snapshot = DraftSnapshot::capture(form, technologies);
        let serialized = serde_json::to_string(&snapshot)?;
        self.store.save(&serialized)?;
        tracing::debug!(tags = technologies.len(), "draft saved");
        Ok(())
    }

    /// Stored draft, if there is a usable one.
    pub fn restore(&self) -> Option<DraftSnapshot> {
        let raw = self.store.load()?;
        if raw.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<DraftSnapshot>(&raw) {
            Ok(snapshot) if !snapshot.is_empty() => Some(snapshot),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unreadable draft");
                None
            }
        }
    }
}
