use crate::config::Config;
use crate::error::Error;
use crate::google::{FileTokenProvider, GmailClient, GoogleCalendarClient};
use crate::sync::{self, SyncReport};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Wire up the real Google clients and run one pass
pub async fn run_once(config: Config) -> miette::Result<SyncReport> {
    let tokens = FileTokenProvider::new(config.clone());
    let mail = GmailClient::new();
    let calendar = GoogleCalendarClient::new();

    let report = sync::run_pass(&tokens, &mail, &calendar, &config).await?;

    info!(
        "Pass complete: {} listed, {} event(s) created, {} skipped",
        report.listed, report.created, report.skipped
    );

    Ok(report)
}
