use std::path::Path;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SheetsError};

const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_LIFETIME_SECS: i64 = 3600;

/// Relevant fields of a Google service-account key file.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    pub token_uri: String,
}

impl ServiceAccountKey {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SheetsError::Credentials(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| SheetsError::Credentials(format!("invalid key file: {e}")))
    }
}

#[derive(Debug, Serialize)]
struct Claims {
    iss: String,
    scope: String,
    aud: String,
    exp: i64,
    iat: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange a signed service-account assertion for a bearer token.
pub(crate) async fn fetch_access_token(
    http: &reqwest::Client,
    key: &ServiceAccountKey,
) -> Result<String> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        iss: key.client_email.clone(),
        scope: SHEETS_SCOPE.to_string(),
        aud: key.token_uri.clone(),
        exp: now + TOKEN_LIFETIME_SECS,
        iat: now,
    };

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| SheetsError::Credentials(format!("invalid private key: {e}")))?;
    let assertion = encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
        .map_err(|e| SheetsError::Auth(e.to_string()))?;

    let resp = http
        .post(&key.token_uri)
        .form(&[("grant_type", GRANT_TYPE), ("assertion", &assertion)])
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        return Err(SheetsError::Auth(format!(
            "token exchange failed ({status}): {message}"
        )));
    }

    let token: TokenResponse = resp
        .json()
        .await
        .map_err(|e| SheetsError::Auth(format!("malformed token response: {e}")))?;

    Ok(token.access_token)
}
