use crate::app::domain::Technologies;

/// Edits the technology tags and keeps the serialized payload that goes
/// out with the form in step with them.
#[derive(Debug)]
pub struct TagListEditor {
    payload: String,
}

impl Default for TagListEditor {
    fn default() -> Self {
        Self {
            payload: "[]".to_string(),
        }
    }
}

impl TagListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim `text` and append it unless blank or already present.
    /// Returns true if a tag was added.
    pub fn add(&mut self, tags: &mut Technologies, text: &str) -> bool {
        let added = tags.push_unique(text.trim());
        if added {
            self.sync(tags);
        }
        added
    }

    /// Remove the tag at `index`; out-of-range indices do nothing.
    pub fn remove_at(&mut self, tags: &mut Technologies, index: usize) -> bool {
        let removed = tags.remove_at(index).is_some();
        if removed {
            self.sync(tags);
        }
        removed
    }

    /// Replace every tag, dropping blanks and duplicates.
    pub fn replace_all(&mut self, tags: &mut Technologies, incoming: &[String]) {
        tags.clear();
        for tag in incoming {
            tags.push_unique(tag.trim());
        }
        self.sync(tags);
    }

    pub fn sync(&mut self, tags: &Technologies) {
        self.payload = serialize_tags(tags.as_slice());
    }

    /// JSON array of the current tags.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

pub fn serialize_tags(tags: &[String]) -> String {
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
}
