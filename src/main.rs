use std::error::Error;
use std::sync::Arc;

use movies_api::{http, seed, Config, CorsPolicy};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = Arc::new(seed::load_store(config.seed_file.as_deref())?);
    let policy = CorsPolicy::new(config.allowed_origins.iter().cloned());

    http::serve(store, policy, config.bind_addr()).await?;
    Ok(())
}
