use crate::config::Config;
use crate::error::{token_error, SyncResult};
use crate::sync::TokenProvider;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// OAuth token provider backed by a token file on disk.
///
/// The file is created by the `gymcal-token` binary; this provider only reads
/// it and refreshes the access token when it has expired.
#[derive(Clone)]
pub struct FileTokenProvider {
    config: Config,
    client: Client,
}

impl FileTokenProvider {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Read the stored token, if any
    fn read_token(&self) -> SyncResult<Option<Value>> {
        if !Path::new(&self.config.token_file).exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.config.token_file)?;
        let token: Value = serde_json::from_str(&content)
            .map_err(|e| token_error(&format!("Failed to parse token file: {}", e)))?;

        Ok(Some(token))
    }

    /// Persist a token for later runs
    pub fn store_token(&self, token: &Value) -> SyncResult<()> {
        fs::write(&self.config.token_file, token.to_string())?;
        Ok(())
    }

    /// Refresh an expired token
    async fn refresh_token(&self, token: &Value) -> SyncResult<Value> {
        let refresh_token = token
            .get("refresh_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| token_error("No refresh token in token data"))?;

        let params = [
            ("client_id", self.config.google_client_id.clone()),
            ("client_secret", self.config.google_client_secret.clone()),
            ("refresh_token", refresh_token.to_string()),
            ("grant_type", "refresh_token".to_string()),
        ];

        let response = self
            .client
            .post(TOKEN_ENDPOINT)
            .form(&params)
            .send()
            .await
            .map_err(|e| token_error(&format!("Failed to refresh token: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(token_error(&format!(
                "Failed to refresh token: HTTP {} - {}",
                status, error_body
            )));
        }

        let new_token: Value = response
            .json()
            .await
            .map_err(|e| token_error(&format!("Failed to parse token response: {}", e)))?;

        let access_token = new_token
            .get("access_token")
            .cloned()
            .ok_or_else(|| token_error("Token response missing 'access_token' field"))?;

        // Combine new access token with the existing refresh token
        let expires_in = new_token
            .get("expires_in")
            .and_then(|v| v.as_i64())
            .unwrap_or(3600);
        let expires_at = Utc::now().timestamp() + expires_in;

        let token_json = json!({
            "access_token": access_token,
            "refresh_token": refresh_token,
            "expires_at": expires_at,
        });

        self.store_token(&token_json)?;

        Ok(token_json)
    }
}

#[async_trait]
impl TokenProvider for FileTokenProvider {
    /// Get a usable access token, refreshing the stored one when expired
    async fn access_token(&self) -> SyncResult<String> {
        let token = self.read_token()?.ok_or_else(|| {
            token_error("No stored token found. Run gymcal-token to authorize.")
        })?;

        let expires_at = token.get("expires_at").and_then(|v| v.as_i64());
        let token = match expires_at {
            Some(expiry) if expiry > Utc::now().timestamp() => token,
            _ => {
                debug!("Stored token expired, refreshing");
                self.refresh_token(&token).await?
            }
        };

        token
            .get("access_token")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| token_error("No access token available"))
    }
}
