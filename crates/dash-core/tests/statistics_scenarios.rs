// crates/dash-core/tests/statistics_scenarios.rs
//
// Aggregation scenarios over hand-built trade histories.

use chrono::{Duration, Utc};
use dash_core::history::HistoryEntry;
use dash_core::order::OrderSide;
use dash_core::stats::{aggregate, channel_key};

fn trade(id: &str, channel_id: u32, symbol: &str, pnl: f64, minutes_ago: i64) -> HistoryEntry {
    HistoryEntry {
        id: id.to_string(),
        channel_id,
        symbol: symbol.to_string(),
        side: if pnl >= 0.0 {
            OrderSide::Buy
        } else {
            OrderSide::Sell
        },
        volume: 0.10,
        entry_price: 1.1000,
        exit_price: 1.1000 + pnl / 1000.0,
        pnl,
        duration_min: 60,
        close_time: Utc::now() - Duration::minutes(minutes_ago),
    }
}

#[test]
fn global_stats_count_wins_across_all_channels() {
    let history = vec![
        trade("T1", 1, "EURUSD", 50.0, 10),
        trade("T2", 1, "EURUSD", -25.0, 20),
        trade("T3", 2, "XAUUSD", 75.0, 30),
        trade("T4", 2, "XAUUSD", 25.0, 40),
    ];

    let stats = aggregate(&history);
    assert_eq!(stats.global.total_signals, 4);
    assert_eq!(stats.global.win_rate, 75.0);
    // avg win 50, avg loss 25 -> payoff ratio 2.
    assert!((stats.global.avg_rr - 2.0).abs() < 1e-9);
}

#[test]
fn channel_stats_track_best_and_worst_trades() {
    let history = vec![
        trade("T1", 1, "EURUSD", 50.0, 10),
        trade("T2", 1, "GBPUSD", -25.0, 20),
        trade("T3", 1, "EURUSD", 10.0, 30),
        trade("T4", 2, "XAUUSD", -5.0, 40),
    ];

    let stats = aggregate(&history);
    let ch1 = &stats.channels[&channel_key(1)];
    assert_eq!(ch1.total_signals, 3);
    assert_eq!(ch1.best_trade, 50.0);
    assert_eq!(ch1.worst_trade, -25.0);
    assert!((ch1.total_pnl - 35.0).abs() < 1e-9);

    let ch2 = &stats.channels[&channel_key(2)];
    assert_eq!(ch2.total_signals, 1);
    assert_eq!(ch2.win_rate, 0.0);
    assert_eq!(ch2.best_trade, -5.0);
    assert_eq!(ch2.worst_trade, -5.0);
}

#[test]
fn symbol_stats_group_in_first_seen_order() {
    let history = vec![
        trade("T1", 1, "XAUUSD", 30.0, 10),
        trade("T2", 2, "EURUSD", -10.0, 20),
        trade("T3", 1, "XAUUSD", -20.0, 30),
    ];

    let stats = aggregate(&history);
    assert_eq!(stats.symbols.len(), 2);
    assert_eq!(stats.symbols[0].symbol, "XAUUSD");
    assert_eq!(stats.symbols[0].total_trades, 2);
    assert_eq!(stats.symbols[0].win_rate, 50.0);
    assert!((stats.symbols[0].total_pnl - 10.0).abs() < 1e-9);
    assert_eq!(stats.symbols[1].symbol, "EURUSD");
    assert_eq!(stats.symbols[1].total_trades, 1);
}

#[test]
fn one_sided_windows_leave_payoff_ratio_at_zero() {
    let all_wins = vec![trade("T1", 1, "EURUSD", 10.0, 5), trade("T2", 1, "EURUSD", 20.0, 6)];
    assert_eq!(aggregate(&all_wins).global.avg_rr, 0.0);

    let all_losses = vec![trade("T1", 1, "EURUSD", -10.0, 5)];
    assert_eq!(aggregate(&all_losses).global.avg_rr, 0.0);
}
