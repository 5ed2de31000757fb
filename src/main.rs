use std::time::Duration;

use stock_alert::{AlertClient, AlertConfig, AlertPipeline, BusinessCalendar, RunOutcome, Settings};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Some(path) = stock_alert::load_dotenv()? {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let settings = Settings::from_env()?;
    let config = AlertConfig::from_env()?;

    let client = AlertClient::builder()
        .settings(settings)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()?;
    let calendar = BusinessCalendar::us_federal();

    match AlertPipeline::with_client(&calendar, &config, &client).run().await? {
        RunOutcome::NotReady(_) => tracing::info!("skipped: no new session to report"),
        RunOutcome::BelowThreshold { pct, .. } => {
            tracing::info!(symbol = %config.symbol, pct, "no alert");
        }
        RunOutcome::Alerted { pct, sent, .. } => {
            tracing::info!(symbol = %config.symbol, pct, messages = sent.len(), "alert sent");
        }
    }

    Ok(())
}
