use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::app::infrastructure::error::{AppError, Result};

/// Name under which the draft is kept.
pub const DRAFT_KEY: &str = "readme-generator-draft";

/// Durable key-value slot holding the serialized draft.
pub trait DraftStore {
    /// Raw serialized draft, or None if nothing was ever stored.
    fn load(&self) -> Option<String>;
    fn save(&mut self, serialized: &str) -> Result<()>;
}

/// Draft kept as a JSON file in the user's data directory.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// data_dir/readmeforge/readme-generator-draft.json
    pub fn default_location() -> Self {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("readmeforge");
        path.push(format!("{}.json", DRAFT_KEY));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn save(&mut self, serialized: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // The draft file is replaced atomically, never partially written.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| AppError::Draft(format!("Failed to replace draft: {}", e)))?;
        Ok(())
    }
}

/// In-memory store; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(serialized: &str) -> Self {
        let store = Self::default();
        *store.slot.borrow_mut() = Some(serialized.to_string());
        store
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Option<String> {
        self.contents()
    }

    fn save(&mut self, serialized: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(serialized.to_string());
        Ok(())
    }
}
