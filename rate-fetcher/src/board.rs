use crate::models::{SideRate, TradeSide};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SideState {
    pub average: Option<f64>,
    pub loading: bool,
    pub offers: usize,
    pub payment_methods: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Display state for both trade sides.
///
/// Each fetch cycle is numbered. `begin_cycle` raises both loading flags and
/// every side's result is applied at most once per cycle; results that arrive
/// after a newer cycle has started are dropped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RateBoard {
    pub cycle: u64,
    pub buy: SideState,
    pub sell: SideState,
}

impl RateBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_cycle(&mut self) -> u64 {
        self.cycle += 1;
        self.buy.loading = true;
        self.sell.loading = true;
        self.cycle
    }

    /// Returns `false` when the rate was ignored (stale cycle, or the side
    /// already finished this cycle).
    pub fn apply(&mut self, cycle: u64, rate: SideRate) -> bool {
        if cycle != self.cycle {
            return false;
        }

        let state = self.side_mut(rate.side);
        if !state.loading {
            return false;
        }

        state.average = rate.average;
        state.offers = rate.offers;
        state.payment_methods = rate.payment_methods;
        state.updated_at = Some(rate.fetched_at);
        state.loading = false;
        true
    }

    pub fn side(&self, side: TradeSide) -> &SideState {
        match side {
            TradeSide::Buy => &self.buy,
            TradeSide::Sell => &self.sell,
        }
    }

    fn side_mut(&mut self, side: TradeSide) -> &mut SideState {
        match side {
            TradeSide::Buy => &mut self.buy,
            TradeSide::Sell => &mut self.sell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(side: TradeSide, average: Option<f64>) -> SideRate {
        SideRate {
            average,
            offers: average.map_or(0, |_| 10),
            ..SideRate::absent(side)
        }
    }

    #[test]
    fn idle_board_is_not_loading() {
        let board = RateBoard::new();
        assert_eq!(board.cycle, 0);
        assert!(!board.buy.loading);
        assert!(!board.sell.loading);
        assert!(board.buy.average.is_none());
    }

    #[test]
    fn sides_finish_independently() {
        let mut board = RateBoard::new();
        let cycle = board.begin_cycle();
        assert!(board.buy.loading && board.sell.loading);

        assert!(board.apply(cycle, rate(TradeSide::Sell, Some(7.01))));
        assert!(board.buy.loading);
        assert!(!board.sell.loading);
        assert_eq!(board.sell.average, Some(7.01));

        assert!(board.apply(cycle, rate(TradeSide::Buy, None)));
        assert!(!board.buy.loading);
        assert!(board.buy.average.is_none());
        assert_eq!(board.sell.average, Some(7.01));
    }

    #[test]
    fn side_is_applied_once_per_cycle() {
        let mut board = RateBoard::new();
        let cycle = board.begin_cycle();

        assert!(board.apply(cycle, rate(TradeSide::Buy, Some(6.97))));
        assert!(!board.apply(cycle, rate(TradeSide::Buy, Some(1.0))));
        assert_eq!(board.side(TradeSide::Buy).average, Some(6.97));
    }

    #[test]
    fn stale_cycle_results_are_dropped() {
        let mut board = RateBoard::new();
        let first = board.begin_cycle();
        let second = board.begin_cycle();

        assert!(!board.apply(first, rate(TradeSide::Buy, Some(1.0))));
        assert!(board.buy.loading);

        assert!(board.apply(second, rate(TradeSide::Buy, Some(6.97))));
        assert_eq!(board.buy.average, Some(6.97));
    }

    #[test]
    fn failed_side_replaces_previous_average() {
        let mut board = RateBoard::new();
        let cycle = board.begin_cycle();
        board.apply(cycle, rate(TradeSide::Buy, Some(6.97)));

        let cycle = board.begin_cycle();
        assert_eq!(board.buy.average, Some(6.97));
        board.apply(cycle, rate(TradeSide::Buy, None));
        assert!(board.buy.average.is_none());
    }
}
