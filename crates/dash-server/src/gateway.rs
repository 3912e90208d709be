//! The seam between the REST surface and the trading terminal.
//!
//! Handlers never talk to a terminal directly; they go through this
//! trait so the simulated gateway and a real terminal bridge are
//! interchangeable behind the same routes.

use dash_core::{AccountInfo, CloseReceipt, HistoryEntry, Order, Statistics};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// No open position or pending order with this id.
    #[error("order {0} not found")]
    OrderNotFound(String),

    /// The terminal bridge is down; nothing can be served live.
    #[error("trading terminal not connected")]
    NotConnected,
}

/// Backend operations the dashboard needs from a trading terminal.
pub trait TradingGateway: Send + Sync {
    fn account_info(&self) -> Result<AccountInfo, GatewayError>;

    /// Open positions first, then pending orders.
    fn open_orders(&self) -> Result<Vec<Order>, GatewayError>;

    /// Closed trades from the last `days` days, newest first.
    fn history(&self, days: i64) -> Result<Vec<HistoryEntry>, GatewayError>;

    /// Aggregates over a 30-day history window.
    fn statistics(&self) -> Result<Statistics, GatewayError>;

    /// Close an open position or drop a pending order.
    fn close_order(&self, order_id: &str) -> Result<CloseReceipt, GatewayError>;

    fn is_connected(&self) -> bool;
}
