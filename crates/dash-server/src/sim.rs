//! Simulated trading gateway.
//!
//! Stands in for the real terminal bridge during development and in
//! tests. State is seeded from the fixture payloads with timestamps
//! rebased to "now", so the date-window queries behave as they would
//! against a live terminal.

use std::sync::Mutex;

use chrono::{Duration, Utc};
use dash_core::{fixtures, stats, AccountInfo, CloseReceipt, HistoryEntry, Order, OrderStatus, Statistics};
use tracing::info;

use crate::gateway::{GatewayError, TradingGateway};

struct SimState {
    account: AccountInfo,
    open: Vec<Order>,
    closed: Vec<HistoryEntry>,
    next_history_seq: u32,
}

/// In-process gateway over fixture-seeded state.
pub struct SimGateway {
    state: Mutex<SimState>,
}

impl SimGateway {
    /// Gateway seeded from the fixture payloads, order timestamps a few
    /// hours old and closed trades spread over the last three days.
    pub fn seeded() -> Self {
        let now = Utc::now();

        let mut open = fixtures::open_orders();
        for (i, order) in open.iter_mut().enumerate() {
            order.timestamp = now - Duration::hours(3 - i as i64);
        }

        let mut closed = fixtures::history();
        for (i, entry) in closed.iter_mut().enumerate() {
            entry.close_time = now - Duration::days(i as i64 + 1);
        }

        let next_history_seq = closed.len() as u32 + 1;
        SimGateway {
            state: Mutex::new(SimState {
                account: fixtures::account_info(),
                open,
                closed,
                next_history_seq,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SimState> {
        // A poisoned lock still holds usable state.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TradingGateway for SimGateway {
    fn account_info(&self) -> Result<AccountInfo, GatewayError> {
        Ok(self.lock().account)
    }

    fn open_orders(&self) -> Result<Vec<Order>, GatewayError> {
        Ok(self.lock().open.clone())
    }

    fn history(&self, days: i64) -> Result<Vec<HistoryEntry>, GatewayError> {
        let cutoff = Utc::now() - Duration::days(days);
        let mut entries: Vec<HistoryEntry> = self
            .lock()
            .closed
            .iter()
            .filter(|e| e.close_time >= cutoff)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.close_time.cmp(&a.close_time));
        Ok(entries)
    }

    fn statistics(&self) -> Result<Statistics, GatewayError> {
        let window = self.history(30)?;
        Ok(stats::aggregate(&window))
    }

    fn close_order(&self, order_id: &str) -> Result<CloseReceipt, GatewayError> {
        let mut state = self.lock();
        let idx = state
            .open
            .iter()
            .position(|o| o.id == order_id)
            .ok_or_else(|| GatewayError::OrderNotFound(order_id.to_string()))?;
        let order = state.open.remove(idx);

        match order.status {
            OrderStatus::Pending => {
                info!(id = %order.id, "pending order cancelled");
                Ok(CloseReceipt::ok("Order cancelled"))
            }
            _ => {
                let now = Utc::now();
                let seq = state.next_history_seq;
                state.next_history_seq += 1;

                // No market feed in the sim: the position exits flat and
                // its floating P&L realizes as-is.
                let entry = HistoryEntry {
                    id: format!("HIS{seq:03}"),
                    channel_id: order.channel_id,
                    symbol: order.symbol.clone(),
                    side: order.side,
                    volume: order.volume,
                    entry_price: order.entry_price,
                    exit_price: order.entry_price,
                    pnl: order.pnl,
                    duration_min: (now - order.timestamp).num_minutes().max(0),
                    close_time: now,
                };
                state.closed.insert(0, entry);
                state.account.balance += order.pnl;

                info!(id = %order.id, pnl = order.pnl, "position closed");
                Ok(CloseReceipt::ok("Position closed"))
            }
        }
    }

    fn is_connected(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_mirrors_the_fixtures() {
        let gateway = SimGateway::seeded();
        assert_eq!(gateway.account_info().unwrap().balance, 10000.0);
        assert_eq!(gateway.open_orders().unwrap().len(), 3);
        assert_eq!(gateway.history(7).unwrap().len(), 3);
        assert!(gateway.is_connected());
    }

    #[test]
    fn history_respects_the_day_window() {
        let gateway = SimGateway::seeded();
        // Seeded closes are 1, 2 and 3 days old.
        assert_eq!(gateway.history(2).unwrap().len(), 2);
        let newest_first = gateway.history(7).unwrap();
        assert!(newest_first[0].close_time > newest_first[2].close_time);
    }

    #[test]
    fn closing_an_open_position_realizes_its_pnl() {
        let gateway = SimGateway::seeded();
        let receipt = gateway.close_order("ORD001").unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.message, "Position closed");

        assert_eq!(gateway.open_orders().unwrap().len(), 2);
        let history = gateway.history(7).unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].id, "HIS004");
        assert_eq!(history[0].pnl, 125.50);
        assert_eq!(gateway.account_info().unwrap().balance, 10125.50);
    }

    #[test]
    fn cancelling_a_pending_order_leaves_history_untouched() {
        let gateway = SimGateway::seeded();
        let receipt = gateway.close_order("ORD003").unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.message, "Order cancelled");
        assert_eq!(gateway.open_orders().unwrap().len(), 2);
        assert_eq!(gateway.history(7).unwrap().len(), 3);
    }

    #[test]
    fn closing_an_unknown_order_is_an_error() {
        let gateway = SimGateway::seeded();
        let err = gateway.close_order("ORD999").unwrap_err();
        assert!(matches!(err, GatewayError::OrderNotFound(_)));
        // Nothing changed.
        assert_eq!(gateway.open_orders().unwrap().len(), 3);
    }

    #[test]
    fn statistics_aggregate_the_seeded_window() {
        let gateway = SimGateway::seeded();
        let stats = gateway.statistics().unwrap();
        assert_eq!(stats.global.total_signals, 3);
        assert_eq!(stats.global.win_rate, 67.0);
        assert!(stats.channels.contains_key("channel1"));
    }
}
