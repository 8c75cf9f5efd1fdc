pub mod api;
pub mod average;
pub mod board;
pub mod config;
pub mod decode;
pub mod error;
pub mod models;
pub mod rate_fetcher;


pub use board::{RateBoard, SideState};
pub use config::Config;
pub use error::{RateError, Result};
pub use models::{RateSnapshot, SideRate, TradeSide};
pub use rate_fetcher::{CycleHandles, RateFetcher};
