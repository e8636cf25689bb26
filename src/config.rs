use crate::error::{config_error, env_error, SyncResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Default path for the stored OAuth token
pub const DEFAULT_TOKEN_FILE: &str = "token.json";

/// Overrides that can be supplied via config/gymcal.toml instead of the environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FileOverrides {
    target_sender: Option<String>,
    calendar_timezone: Option<String>,
    token_file: Option<String>,
}

/// Main configuration structure for the sync tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sender address (or substring of the From header) that schedule emails come from
    pub target_sender: String,
    /// IANA timezone identifier used for created calendar events
    pub calendar_timezone: String,
    /// Google API client ID
    pub google_client_id: String,
    /// Google API client secret
    pub google_client_secret: String,
    /// Path to the stored OAuth token file
    pub token_file: String,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> SyncResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Optional overrides from file
        let overrides = if let Ok(content) = fs::read_to_string("config/gymcal.toml") {
            toml::from_str::<FileOverrides>(&content)?
        } else {
            FileOverrides::default()
        };

        // Required environment variables
        let google_client_id =
            env::var("GOOGLE_CLIENT_ID").map_err(|_| env_error("GOOGLE_CLIENT_ID"))?;
        let google_client_secret =
            env::var("GOOGLE_CLIENT_SECRET").map_err(|_| env_error("GOOGLE_CLIENT_SECRET"))?;

        // Sender can come from the environment or the overrides file
        let target_sender = env::var("TARGET_SENDER")
            .ok()
            .or(overrides.target_sender)
            .ok_or_else(|| env_error("TARGET_SENDER"))?;

        // Default timezone
        let calendar_timezone = env::var("CALENDAR_TIMEZONE")
            .ok()
            .or(overrides.calendar_timezone)
            .unwrap_or_else(|| String::from("UTC"));

        // Reject timezone identifiers the calendar API would not understand
        calendar_timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone: {}", calendar_timezone)))?;

        let token_file = env::var("TOKEN_FILE")
            .ok()
            .or(overrides.token_file)
            .unwrap_or_else(|| String::from(DEFAULT_TOKEN_FILE));

        Ok(Config {
            target_sender,
            calendar_timezone,
            google_client_id,
            google_client_secret,
            token_file,
        })
    }
}
