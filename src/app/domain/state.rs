/// Which view of the generated document the preview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    Rendered,
    Raw,
}

impl PreviewMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rendered => "Preview",
            Self::Raw => "Markdown",
        }
    }
}

/// Ordered list of technology tags with no duplicates (exact match).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Technologies(Vec<String>);

impl Technologies {
    /// Append `tag` unless it is empty or already present.
    /// Returns true if the list changed.
    pub fn push_unique(&mut self, tag: &str) -> bool {
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Remove the tag at `index`; out-of-range is ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// The single shared record every controller reads and mutates.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub technologies: Technologies,
    current_document: String,
    pub preview_mode: PreviewMode,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_document(&self) -> &str {
        &self.current_document
    }

    pub fn has_document(&self) -> bool {
        !self.current_document.is_empty()
    }

    /// Swap in a freshly generated document. The only way the document
    /// changes; there is no partial update.
    pub fn replace_document(&mut self, markdown: String) {
        self.current_document = markdown;
    }
}
