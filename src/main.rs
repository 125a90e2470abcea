use phishguard::analysis::AnalysisService;
use phishguard::api::ApiServer;
use phishguard::config::Config;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    // Initialize logging; RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.is_json() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).pretty().init();
    }

    info!("Starting phishguard server");
    info!("  API listening on: {}", config.server.listen_addr);
    info!("  Simulated latency: {}", config.analysis.simulate_latency);

    let service = Arc::new(AnalysisService::new(config.analysis.clone()));

    let server = ApiServer::new(service, config.server.listen_addr.clone());
    server.run().await?;

    Ok(())
}
