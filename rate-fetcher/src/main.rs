use dotenv::dotenv;
use rate_fetcher::{Config, RateFetcher, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv().ok();

    let config = Config::from_env()?;

    let fetcher = RateFetcher::new(config)?;
    fetcher.run().await?;

    Ok(())
}
