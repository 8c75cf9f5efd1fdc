use dotenv::dotenv;
use p2p_proxy::{config::Config, error::Result, router, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv().ok();

    let config = Config::from_env()?;

    let state = Arc::new(AppState::new(config.upstream_url.clone()));
    let app = router(state);

    let addr = config.bind_addr();
    info!("Starting P2P proxy on {} -> {}", addr, config.upstream_url);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
