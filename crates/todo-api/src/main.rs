//! Todo API server entry point

use anyhow::Result;

use todo_api::{telemetry::init_tracing, ApiServer, ConfigLoader};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConfigLoader::new().load()?;
    init_tracing(&config.log_level);

    ApiServer::new(config).run().await?;
    Ok(())
}
