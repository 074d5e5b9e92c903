use anyhow::Result;
use tracing::info;

use client_directory::config::Config;
use client_directory::logging;
use client_directory::service::DirectoryService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    logging::init_logging(&config.logging);

    info!("Starting Client Directory v{}", env!("CARGO_PKG_VERSION"));

    let service = DirectoryService::connect(&config.database).await?;
    service.initialize_schema().await?;
    persistence::metrics::record_pool_metrics(service.pool());

    info!("Store is provisioned and ready");
    Ok(())
}
