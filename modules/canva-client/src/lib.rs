pub mod error;

pub use error::{CanvaError, Result};

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.canva.com/rest/v1";

#[derive(Debug, Deserialize)]
struct DesignResponse {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExportResponse {
    url: Option<String>,
}

/// Client for the Canva design REST API: create a design from a template,
/// export it as PNG, and download the rendered image.
pub struct CanvaClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CanvaClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create a design from a template with a title text and a logo image.
    /// Returns the design id.
    pub async fn create_design(
        &self,
        template_id: &str,
        title_text: &str,
        logo_url: &str,
    ) -> Result<String> {
        let payload = serde_json::json!({
            "template_id": template_id,
            "title": title_text,
            "components": [
                {"id": "title_text", "type": "TEXT", "properties": {"text": title_text}},
                {"id": "app_logo", "type": "IMAGE", "properties": {"url": logo_url}},
            ],
        });

        let resp = self
            .client
            .post(format!("{}/designs", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(CanvaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let design: DesignResponse = resp.json().await?;
        design
            .id
            .ok_or_else(|| CanvaError::DesignFailed("response missing design id".to_string()))
    }

    /// Export a design as PNG. Returns the download URL.
    pub async fn export_design(&self, design_id: &str) -> Result<String> {
        let resp = self
            .client
            .post(format!("{}/designs/{design_id}/export", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({"format": "PNG"}))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(CanvaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let export: ExportResponse = resp.json().await?;
        export
            .url
            .ok_or_else(|| CanvaError::ExportFailed("response missing export url".to_string()))
    }

    /// Download the exported image bytes.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(CanvaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }

    /// Full create → export → download flow. Returns PNG bytes.
    pub async fn render(
        &self,
        template_id: &str,
        title_text: &str,
        logo_url: &str,
    ) -> Result<Vec<u8>> {
        debug!(template_id, "Rendering design from template");
        let design_id = self.create_design(template_id, title_text, logo_url).await?;
        let export_url = self.export_design(&design_id).await?;
        let png = self.download(&export_url).await?;
        debug!(design_id = %design_id, bytes = png.len(), "Downloaded exported design");
        Ok(png)
    }
}
