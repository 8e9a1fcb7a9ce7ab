//! Gemini Chat Relay server binary.

use gemini_chat_relay::config::Config;
use gemini_chat_relay::startup::Application;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
