//! Return calculations for positions, pies and whole portfolios.
//!
//! Everything here is a pure function of the raw API fields and is
//! recomputed on each call, so a refreshed record never reports a stale
//! percentage.

use serde::Serialize;
use trading212_api::types::{Pie, Position};

/// Percentage return of `profit_loss` on `buy_value`, rounded to 2 decimals.
///
/// A zero buy value (e.g. a fully sold position) yields 0.0 rather than
/// dividing by zero.
pub fn percent_change(profit_loss: f64, buy_value: f64) -> f64 {
    if buy_value == 0.0 {
        return 0.0;
    }
    round2((profit_loss / buy_value) * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Cost, profit/loss and return of something that was bought.
pub trait Performance {
    /// What was paid for the holding.
    fn buy_value(&self) -> f64;

    /// Gain or loss relative to [`Performance::buy_value`].
    fn profit_loss(&self) -> f64;

    fn return_pct(&self) -> f64 {
        percent_change(self.profit_loss(), self.buy_value())
    }
}

/// Measured in the instrument's currency, from average and current price.
/// Currency effects (`fx_ppl`) are excluded.
impl Performance for Position {
    fn buy_value(&self) -> f64 {
        self.average_price * self.quantity
    }

    fn profit_loss(&self) -> f64 {
        (self.current_price - self.average_price) * self.quantity
    }
}

impl Performance for Pie {
    fn buy_value(&self) -> f64 {
        self.result.price_avg_invested_value
    }

    fn profit_loss(&self) -> f64 {
        self.result.price_avg_result
    }
}

/// Aggregate totals over a set of positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub positions: usize,
    pub invested: f64,
    pub current_value: f64,
    pub profit_loss: f64,
    pub return_pct: f64,
    /// Sum of the API's own `ppl`, in the account currency.
    pub reported_ppl: f64,
}

/// Sums cost and value across positions. Mixing instrument currencies makes
/// the price-based totals approximate; `reported_ppl` is exact.
pub fn portfolio_summary(positions: &[Position]) -> PortfolioSummary {
    let invested: f64 = positions.iter().map(|p| p.buy_value()).sum();
    let profit_loss: f64 = positions.iter().map(|p| p.profit_loss()).sum();
    PortfolioSummary {
        positions: positions.len(),
        invested: round2(invested),
        current_value: round2(positions.iter().map(|p| p.current_price * p.quantity).sum()),
        profit_loss: round2(profit_loss),
        return_pct: percent_change(profit_loss, invested),
        reported_ppl: round2(positions.iter().map(|p| p.ppl).sum()),
    }
}

/// Positions ordered by return, best first.
pub fn rank_by_return(positions: &[Position]) -> Vec<(&Position, f64)> {
    let mut ranked: Vec<(&Position, f64)> = positions.iter().map(|p| (p, p.return_pct())).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}
