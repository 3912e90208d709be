//! Fixture payloads.
//!
//! These are the development placeholders the dashboard shipped with
//! before a live backend existed. They do double duty:
//! - the data-access client serves them when the server is unreachable,
//! - the simulated gateway seeds its state from them,
//! - tests assert against their exact values.

use chrono::{DateTime, Utc};

use crate::account::AccountInfo;
use crate::history::HistoryEntry;
use crate::order::{Order, OrderSide, OrderStatus};
use crate::stats::{ChannelStats, GlobalStats, Statistics, SymbolStats};

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("fixture timestamp is valid RFC 3339")
        .with_timezone(&Utc)
}

pub fn account_info() -> AccountInfo {
    AccountInfo {
        balance: 10000.0,
        equity: 10250.0,
        free_margin: 8500.0,
    }
}

pub fn open_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD001".to_string(),
            channel_id: 1,
            symbol: "XAUUSD".to_string(),
            side: OrderSide::Buy,
            volume: 0.05,
            entry_price: 2329.79,
            stop_loss: 2314.90,
            take_profit: 2350.00,
            status: OrderStatus::Open,
            pnl: 125.50,
            timestamp: ts("2024-01-15T10:30:00Z"),
        },
        Order {
            id: "ORD002".to_string(),
            channel_id: 1,
            symbol: "XAUUSD".to_string(),
            side: OrderSide::Buy,
            volume: 0.05,
            entry_price: 2329.79,
            stop_loss: 2314.90,
            take_profit: 2375.00,
            status: OrderStatus::Open,
            pnl: 125.50,
            timestamp: ts("2024-01-15T10:30:00Z"),
        },
        Order {
            id: "ORD003".to_string(),
            channel_id: 2,
            symbol: "EURUSD".to_string(),
            side: OrderSide::Sell,
            volume: 0.10,
            entry_price: 1.0850,
            stop_loss: 1.0890,
            take_profit: 1.0800,
            status: OrderStatus::Pending,
            pnl: 0.0,
            timestamp: ts("2024-01-15T11:00:00Z"),
        },
    ]
}

pub fn history() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry {
            id: "HIS001".to_string(),
            channel_id: 1,
            symbol: "XAUUSD".to_string(),
            side: OrderSide::Buy,
            volume: 0.05,
            entry_price: 2320.00,
            exit_price: 2340.00,
            pnl: 100.00,
            duration_min: 120,
            close_time: ts("2024-01-14T15:30:00Z"),
        },
        HistoryEntry {
            id: "HIS002".to_string(),
            channel_id: 2,
            symbol: "EURUSD".to_string(),
            side: OrderSide::Sell,
            volume: 0.08,
            entry_price: 1.0900,
            exit_price: 1.0850,
            pnl: 40.00,
            duration_min: 85,
            close_time: ts("2024-01-13T14:20:00Z"),
        },
        HistoryEntry {
            id: "HIS003".to_string(),
            channel_id: 1,
            symbol: "GBPUSD".to_string(),
            side: OrderSide::Buy,
            volume: 0.06,
            entry_price: 1.2700,
            exit_price: 1.2680,
            pnl: -12.00,
            duration_min: 45,
            close_time: ts("2024-01-12T09:15:00Z"),
        },
    ]
}

pub fn statistics() -> Statistics {
    let mut channels = std::collections::BTreeMap::new();
    channels.insert(
        "channel1".to_string(),
        ChannelStats {
            total_signals: 28,
            win_rate: 71.0,
            avg_rr: 2.5,
            total_pnl: 850.00,
            best_trade: 250.00,
            worst_trade: -45.00,
        },
    );
    channels.insert(
        "channel2".to_string(),
        ChannelStats {
            total_signals: 17,
            win_rate: 59.0,
            avg_rr: 2.0,
            total_pnl: 320.00,
            best_trade: 180.00,
            worst_trade: -60.00,
        },
    );

    Statistics {
        global: GlobalStats {
            win_rate: 67.0,
            avg_rr: 2.3,
            total_signals: 45,
        },
        channels,
        symbols: vec![
            SymbolStats {
                symbol: "XAUUSD".to_string(),
                total_trades: 15,
                win_rate: 73.0,
                avg_rr: 2.8,
                total_pnl: 650.00,
            },
            SymbolStats {
                symbol: "EURUSD".to_string(),
                total_trades: 12,
                win_rate: 58.0,
                avg_rr: 2.1,
                total_pnl: 280.00,
            },
            SymbolStats {
                symbol: "GBPUSD".to_string(),
                total_trades: 8,
                win_rate: 62.0,
                avg_rr: 1.9,
                total_pnl: 120.00,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use crate::order::OrderStatus;

    #[test]
    fn account_fixture_matches_known_values() {
        let account = super::account_info();
        assert_eq!(account.balance, 10000.0);
        assert_eq!(account.equity, 10250.0);
        assert_eq!(account.free_margin, 8500.0);
        assert_eq!(account.floating_pnl(), 250.0);
    }

    #[test]
    fn order_fixtures_hold_three_orders_with_one_pending() {
        let orders = super::open_orders();
        assert_eq!(orders.len(), 3);
        let pending = orders.iter().find(|o| o.id == "ORD003").unwrap();
        assert_eq!(pending.status, OrderStatus::Pending);
        assert_eq!(pending.pnl, 0.0);
    }

    #[test]
    fn history_fixtures_hold_three_entries_with_one_loser() {
        let history = super::history();
        assert_eq!(history.len(), 3);
        let loser = history.iter().find(|h| h.id == "HIS003").unwrap();
        assert_eq!(loser.pnl, -12.00);
        assert!(!loser.is_win());
    }

    #[test]
    fn statistics_fixture_covers_both_channels_and_three_symbols() {
        let stats = super::statistics();
        assert_eq!(stats.global.total_signals, 45);
        assert_eq!(stats.channels.len(), 2);
        assert_eq!(stats.symbols.len(), 3);
    }
}
