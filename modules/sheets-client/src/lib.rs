pub mod auth;
pub mod error;

pub use auth::ServiceAccountKey;
pub use error::{Result, SheetsError};

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Google Sheets REST client covering the two operations the pipeline
/// needs: read a range and append a row.
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl SheetsClient {
    /// Authenticate with a service-account key file and return a ready client.
    pub async fn connect(key_path: &Path) -> Result<Self> {
        Self::connect_with_base_url(key_path, DEFAULT_BASE_URL).await
    }

    pub async fn connect_with_base_url(key_path: &Path, base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        let key = ServiceAccountKey::from_file(key_path)?;
        let access_token = auth::fetch_access_token(&http, &key).await?;
        debug!(client_email = %key.client_email, "Sheets service account authenticated");

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    /// Read cell values for a range. An empty sheet yields an empty Vec.
    pub async fn values(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<String>>> {
        let url = format!("{}/{spreadsheet_id}/values/{range}", self.base_url);

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let value_range: ValueRange = resp.json().await?;
        Ok(value_range.values)
    }

    /// Append one row after the last row of the range.
    pub async fn append_row(
        &self,
        spreadsheet_id: &str,
        range: &str,
        row: &[String],
    ) -> Result<()> {
        let url = format!(
            "{}/{spreadsheet_id}/values/{range}:append?valueInputOption=RAW",
            self.base_url
        );

        let body = serde_json::json!({ "values": [row] });

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
