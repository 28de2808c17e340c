//! Client for the README generation service.
//!
//! Endpoints:
//! - `POST /api/generate` - generate README markdown from a form snapshot
//! - `POST /api/export` - push a README to a GitHub repository
//! - `GET /api/templates` - template types, technology suggestions, licenses
//! - `GET /api/validate-token` - check a GitHub personal access token

use serde::{Deserialize, Serialize};

use crate::app::domain::{ApiReply, AppSettings, ExportRequest, FormSnapshot, TemplateCatalog};
use crate::app::infrastructure::error::{AppError, Result};

#[derive(Debug, Deserialize)]
struct TokenCheck {
    #[serde(default)]
    valid: bool,
}

/// The remote collaborator the controllers talk to.
pub trait ReadmeApi: Send + Sync {
    fn generate(&self, request: &FormSnapshot) -> Result<ApiReply>;
    fn export(&self, request: &ExportRequest) -> Result<ApiReply>;
    fn templates(&self) -> Result<TemplateCatalog>;
    fn validate_token(&self, token: &str) -> Result<bool>;
}

/// `ReadmeApi` over HTTP with `minreq`.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    timeout_secs: u64,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout_secs,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Result<Self> {
        Ok(Self::new(settings.api_base()?, settings.request_timeout_secs))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and decode the reply whatever the HTTP status;
    /// the service reports failures in the body.
    fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiReply> {
        let response = minreq::post(self.url(path))
            .with_header("Accept", "application/json")
            .with_json(body)?
            .with_timeout(self.timeout_secs)
            .send()?;
        tracing::debug!(path, status = response.status_code, "service replied");
        let reply = serde_json::from_str(response.as_str()?)?;
        Ok(reply)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, request: minreq::Request) -> Result<T> {
        let response = request
            .with_header("Accept", "application/json")
            .with_timeout(self.timeout_secs)
            .send()?;
        if !(200..300).contains(&response.status_code) {
            return Err(AppError::Status(response.status_code));
        }
        Ok(serde_json::from_str(response.as_str()?)?)
    }
}

impl ReadmeApi for HttpApi {
    fn generate(&self, request: &FormSnapshot) -> Result<ApiReply> {
        self.post_json("/api/generate", request)
    }

    fn export(&self, request: &ExportRequest) -> Result<ApiReply> {
        self.post_json("/api/export", request)
    }

    fn templates(&self) -> Result<TemplateCatalog> {
        self.get_json(minreq::get(self.url("/api/templates")))
    }

    fn validate_token(&self, token: &str) -> Result<bool> {
        let request = minreq::get(self.url("/api/validate-token")).with_param("token", token);
        let check: TokenCheck = self.get_json(request)?;
        Ok(check.valid)
    }
}
