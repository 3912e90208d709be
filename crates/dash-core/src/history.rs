//! Closed-trade records served by `GET /history`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::order::OrderSide;

/// A completed round trip: entry, exit, realized P&L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub channel_id: u32,
    pub symbol: String,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub volume: f64,
    pub entry_price: f64,
    pub exit_price: f64,
    pub pnl: f64,
    /// Time in market, minutes.
    #[serde(rename = "duration")]
    pub duration_min: i64,
    pub close_time: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn is_win(&self) -> bool {
        self.pnl > 0.0
    }
}
