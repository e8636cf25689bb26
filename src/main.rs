use gymcal::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting gymcal");

    // Load configuration
    let config = startup::load_config()?;

    // Run a single mail-to-calendar pass
    startup::run_once(config).await?;

    Ok(())
}
