mod routes;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use rate_fetcher::{Config, RateBoard, RateFetcher};
use std::io;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct AppState {
    pub fetcher: RateFetcher,
    pub board: Arc<Mutex<RateBoard>>,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let bind = std::env::var("DASHBOARD_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    info!("Starting rate dashboard on http://{}", bind);
    info!("P2P API URL: {}", config.api_url);

    let fetcher = RateFetcher::new(config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let app_state = web::Data::new(AppState {
        fetcher,
        board: Arc::new(Mutex::new(RateBoard::new())),
    });

    // kick off the first fetch before serving
    app_state.fetcher.spawn_cycle(app_state.board.clone()).await;

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
