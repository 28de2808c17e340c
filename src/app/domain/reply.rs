//! Bodies exchanged with the README service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reply shape shared by the generate and export endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiReply {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Field-level validation failures, keyed by field name.
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

impl ApiReply {
    pub fn success(markdown: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            markdown: Some(markdown.into()),
            ..Default::default()
        }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            error: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Server-supplied explanation of a failure, if any.
    pub fn failure_reason(&self) -> Option<String> {
        if let Some(reason) = self.error.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            return Some(reason.to_string());
        }
        if self.errors.is_empty() {
            return None;
        }
        let joined = self
            .errors
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect::<Vec<_>>()
            .join("; ");
        Some(joined)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub repository_url: String,
    pub readme_content: String,
    pub github_token: String,
}

impl fmt::Debug for ExportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportRequest")
            .field("repository_url", &self.repository_url)
            .field("readme_content", &format_args!("{} bytes", self.readme_content.len()))
            .field("github_token", &"<redacted>")
            .finish()
    }
}

/// Options the service offers for the form's selection controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub licenses: Vec<String>,
}
