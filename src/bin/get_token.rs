use gymcal::config::Config;
use gymcal::error::{other_error, token_error, SyncResult};
use gymcal::google::FileTokenProvider;
use serde_json::json;

const SCOPES: &str =
    "https://www.googleapis.com/auth/gmail.modify https://www.googleapis.com/auth/calendar.events";

#[tokio::main]
async fn main() -> SyncResult<()> {
    // Load configuration
    let config = Config::load()?;

    // Create token provider to store the result
    let token_provider = FileTokenProvider::new(config.clone());

    // Generate random state for security
    let state = uuid::Uuid::new_v4().to_string();

    // Construct authorization URL
    let auth_url = format!(
        "https://accounts.google.com/o/oauth2/v2/auth?\
        client_id={}&\
        redirect_uri=http://localhost:8080&\
        response_type=code&\
        access_type=offline&\
        prompt=consent&\
        scope={}&\
        state={}",
        config.google_client_id,
        urlencoded(SCOPES),
        state
    );

    // Open browser for authorization
    println!("Opening browser for Google authorization...");
    webbrowser::open(&auth_url)?;

    // Start local server to receive the callback
    let server = tiny_http::Server::http("0.0.0.0:8080")
        .map_err(|e| other_error(&format!("Failed to start callback server: {}", e)))?;
    println!("Waiting for authorization callback...");

    // Handle the callback
    let request = server.recv()?;
    let url = request.url().to_string();

    // Parse the authorization code from the URL
    let code = url
        .split("code=")
        .nth(1)
        .and_then(|s| s.split('&').next())
        .ok_or_else(|| other_error("No authorization code found in callback"))?;

    // Exchange code for tokens
    let client = reqwest::Client::new();

    let response = client
        .post("https://oauth2.googleapis.com/token")
        .form(&[
            ("client_id", config.google_client_id.clone()),
            ("client_secret", config.google_client_secret.clone()),
            ("code", code.to_string()),
            ("redirect_uri", "http://localhost:8080".to_string()),
            ("grant_type", "authorization_code".to_string()),
        ])
        .send()
        .await
        .map_err(|e| token_error(&format!("Failed to request token: {}", e)))?;

    if !response.status().is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response".to_string());
        return Err(token_error(&format!("Failed to get token: {}", error_text)));
    }

    let mut token_data: serde_json::Value = response
        .json()
        .await
        .map_err(|e| token_error(&format!("Failed to parse token response: {}", e)))?;

    // Add expiry timestamp
    let expires_in = token_data
        .get("expires_in")
        .and_then(|v| v.as_i64())
        .unwrap_or(3600);
    let expires_at = chrono::Utc::now().timestamp() + expires_in;

    if let Some(obj) = token_data.as_object_mut() {
        obj.insert("expires_at".to_string(), json!(expires_at));
    } else {
        return Err(token_error("Token data is not an object"));
    }

    // Save token to the configured file
    token_provider.store_token(&token_data)?;

    // Send success response to browser
    let response =
        tiny_http::Response::from_string("Authorization successful! You can close this window.");
    request.respond(response)?;

    println!("Token saved to {}", config.token_file);

    Ok(())
}

/// Percent-encode the space-separated scope list
fn urlencoded(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
