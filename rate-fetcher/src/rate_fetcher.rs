use crate::api::P2pClient;
use crate::average::{average_price, payment_methods};
use crate::board::RateBoard;
use crate::config::Config;
use crate::error::{ErrorKind, RateError, Result};
use crate::models::{RateSnapshot, SideRate, TradeSide};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{error, info, warn};

/// Tasks spawned for one board cycle.
pub struct CycleHandles {
    pub cycle: u64,
    pub buy: JoinHandle<()>,
    pub sell: JoinHandle<()>,
}

impl CycleHandles {
    pub async fn join(self) {
        let (buy, sell) = tokio::join!(self.buy, self.sell);
        for (side, outcome) in [(TradeSide::Buy, buy), (TradeSide::Sell, sell)] {
            if let Err(e) = outcome {
                error!("{} fetch task for cycle {} did not finish: {}", side, self.cycle, e);
            }
        }
    }
}

#[derive(Clone)]
pub struct RateFetcher {
    client: P2pClient,
}

impl RateFetcher {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            client: P2pClient::new(config)?,
        })
    }

    pub fn config(&self) -> &Config {
        self.client.config()
    }

    /// Fetches and averages one side. Failures are logged and yield an
    /// absent average.
    pub async fn fetch_side(&self, side: TradeSide) -> SideRate {
        let outcome = match self.client.fetch_result(side).await {
            Ok(result) => average_price(&result).map(|average| (average, result)),
            Err(e) => Err(e),
        };

        match outcome {
            Ok((average, result)) => {
                info!("Average {} price: {:.2} {}", side, average, self.config().fiat);
                SideRate {
                    side,
                    average: Some(average),
                    offers: result.records().len(),
                    payment_methods: payment_methods(&result),
                    fetched_at: Utc::now(),
                }
            }
            Err(e) => {
                log_failure(side, &e);
                SideRate::absent(side)
            }
        }
    }

    pub async fn fetch_both(&self) -> RateSnapshot {
        let (buy, sell) = tokio::join!(
            self.fetch_side(TradeSide::Buy),
            self.fetch_side(TradeSide::Sell)
        );
        RateSnapshot { buy, sell }
    }

    /// Starts a new board cycle and fetches both sides on separate tasks.
    /// Each task writes only its own side, in whatever order they complete.
    pub async fn spawn_cycle(&self, board: Arc<Mutex<RateBoard>>) -> CycleHandles {
        let cycle = board.lock().await.begin_cycle();
        info!("Fetching exchange rates (cycle {})...", cycle);

        let [buy, sell] = TradeSide::ALL.map(|side| {
            let fetcher = self.clone();
            let board = board.clone();
            tokio::spawn(async move {
                let rate = fetcher.fetch_side(side).await;
                board.lock().await.apply(cycle, rate);
            })
        });

        CycleHandles { cycle, buy, sell }
    }

    pub async fn run(&self) -> Result<()> {
        let interval = self.config().refresh_interval_secs;
        info!(
            "Starting rate fetcher for {}/{} against {}",
            self.config().asset,
            self.config().fiat,
            self.config().api_url
        );

        if interval == 0 {
            let snapshot = self.fetch_both().await;
            log_snapshot(&snapshot);
            return Ok(());
        }

        info!("Refresh interval: {}s", interval);
        let mut ticker = time::interval(Duration::from_secs(interval));
        loop {
            ticker.tick().await;
            let snapshot = self.fetch_both().await;
            log_snapshot(&snapshot);
        }
    }
}

fn log_failure(side: TradeSide, e: &RateError) {
    match e.kind() {
        ErrorKind::Transport => error!("Error fetching exchange rate ({}): {}", side, e),
        ErrorKind::Upstream => warn!("No {} data available: {}", side, e),
        ErrorKind::Decode | ErrorKind::Parse | ErrorKind::Config => {
            error!("Error parsing {} response: {}", side, e)
        }
    }
}

fn log_snapshot(snapshot: &RateSnapshot) {
    for rate in [&snapshot.buy, &snapshot.sell] {
        match rate.average {
            Some(average) => info!(
                "[{}] {:.2} over {} offers ({})",
                rate.side,
                average,
                rate.offers,
                rate.payment_methods.join(", ")
            ),
            None => info!("[{}] no price available", rate.side),
        }
    }
}
