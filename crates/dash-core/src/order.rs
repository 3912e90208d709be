//! Open / pending order records served by `GET /orders`.
//!
//! Wire field names (`channelId`, `sl`, `tp`, `type`, `pnl`) are part
//! of the API contract, so the serde attributes here are load-bearing,
//! not cosmetics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

/// Lifecycle state of an order as the dashboard sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Open,
    Pending,
    Closed,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Open => "OPEN",
            OrderStatus::Pending => "PENDING",
            OrderStatus::Closed => "CLOSED",
        }
    }
}

/// A single open or pending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub channel_id: u32,
    pub symbol: String,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub volume: f64,
    pub entry_price: f64,
    #[serde(rename = "sl")]
    pub stop_loss: f64,
    #[serde(rename = "tp")]
    pub take_profit: f64,
    pub status: OrderStatus,
    pub pnl: f64,
    pub timestamp: DateTime<Utc>,
}

impl Order {
    /// Risk/reward ratio implied by the bracket: reward distance over
    /// risk distance. `None` when the stop sits on the entry price.
    pub fn risk_reward(&self) -> Option<f64> {
        let risk = (self.entry_price - self.stop_loss).abs();
        if risk == 0.0 {
            return None;
        }
        Some((self.take_profit - self.entry_price).abs() / risk)
    }
}
