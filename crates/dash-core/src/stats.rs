//! Aggregate statistics served by `GET /statistics`.
//!
//! The aggregation input is the closed-trade history; orders still on
//! the book contribute nothing here. Win rates are rounded whole
//! percentages, matching what the dashboard displays.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::history::HistoryEntry;

/// Account-wide aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub win_rate: f64,
    #[serde(rename = "avgRR")]
    pub avg_rr: f64,
    pub total_signals: usize,
}

/// Aggregates for one signal channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    pub total_signals: usize,
    pub win_rate: f64,
    #[serde(rename = "avgRR")]
    pub avg_rr: f64,
    pub total_pnl: f64,
    pub best_trade: f64,
    pub worst_trade: f64,
}

/// Aggregates for one traded symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolStats {
    pub symbol: String,
    pub total_trades: usize,
    pub win_rate: f64,
    #[serde(rename = "avgRR")]
    pub avg_rr: f64,
    pub total_pnl: f64,
}

/// Full statistics payload: global, per-channel, per-symbol.
///
/// Channel keys use the wire format `"channel1"`, `"channel2"`, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub global: GlobalStats,
    pub channels: BTreeMap<String, ChannelStats>,
    pub symbols: Vec<SymbolStats>,
}

/// Compute the full statistics block from closed trades.
///
/// Symbols are reported in first-seen order, so a newest-first history
/// lists the most recently traded symbol first.
pub fn aggregate(history: &[HistoryEntry]) -> Statistics {
    let global = GlobalStats {
        win_rate: win_rate(history),
        avg_rr: payoff_ratio(history),
        total_signals: history.len(),
    };

    let mut channels = BTreeMap::new();
    for entry in history {
        let key = channel_key(entry.channel_id);
        if !channels.contains_key(&key) {
            let trades: Vec<HistoryEntry> = history
                .iter()
                .filter(|e| e.channel_id == entry.channel_id)
                .cloned()
                .collect();
            channels.insert(key, channel_stats(&trades));
        }
    }

    let mut symbols: Vec<SymbolStats> = Vec::new();
    for entry in history {
        if symbols.iter().any(|s| s.symbol == entry.symbol) {
            continue;
        }
        let trades: Vec<HistoryEntry> = history
            .iter()
            .filter(|e| e.symbol == entry.symbol)
            .cloned()
            .collect();
        symbols.push(SymbolStats {
            symbol: entry.symbol.clone(),
            total_trades: trades.len(),
            win_rate: win_rate(&trades),
            avg_rr: payoff_ratio(&trades),
            total_pnl: total_pnl(&trades),
        });
    }

    Statistics {
        global,
        channels,
        symbols,
    }
}

/// Wire key for a channel id (`1` -> `"channel1"`).
pub fn channel_key(channel_id: u32) -> String {
    format!("channel{channel_id}")
}

fn channel_stats(trades: &[HistoryEntry]) -> ChannelStats {
    let best = trades.iter().map(|t| t.pnl).fold(f64::MIN, f64::max);
    let worst = trades.iter().map(|t| t.pnl).fold(f64::MAX, f64::min);
    ChannelStats {
        total_signals: trades.len(),
        win_rate: win_rate(trades),
        avg_rr: payoff_ratio(trades),
        total_pnl: total_pnl(trades),
        best_trade: if trades.is_empty() { 0.0 } else { best },
        worst_trade: if trades.is_empty() { 0.0 } else { worst },
    }
}

/// Winning trades as a rounded percentage of all trades.
fn win_rate(trades: &[HistoryEntry]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }
    let wins = trades.iter().filter(|t| t.is_win()).count();
    (wins as f64 / trades.len() as f64 * 100.0).round()
}

/// Realized payoff ratio: average winner over average loser magnitude.
///
/// 0.0 when the window has no winners or no losers, since the ratio is
/// undefined there.
fn payoff_ratio(trades: &[HistoryEntry]) -> f64 {
    let wins: Vec<f64> = trades.iter().filter(|t| t.pnl > 0.0).map(|t| t.pnl).collect();
    let losses: Vec<f64> = trades.iter().filter(|t| t.pnl < 0.0).map(|t| t.pnl).collect();
    if wins.is_empty() || losses.is_empty() {
        return 0.0;
    }
    let avg_win = wins.iter().sum::<f64>() / wins.len() as f64;
    let avg_loss = losses.iter().sum::<f64>() / losses.len() as f64;
    avg_win / avg_loss.abs()
}

fn total_pnl(trades: &[HistoryEntry]) -> f64 {
    trades.iter().map(|t| t.pnl).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_aggregates_to_zeroes() {
        let stats = aggregate(&[]);
        assert_eq!(stats.global.total_signals, 0);
        assert_eq!(stats.global.win_rate, 0.0);
        assert_eq!(stats.global.avg_rr, 0.0);
        assert!(stats.channels.is_empty());
        assert!(stats.symbols.is_empty());
    }

    #[test]
    fn fixture_history_win_rate_rounds_to_whole_percent() {
        let stats = aggregate(&crate::fixtures::history());
        // 2 winners out of 3 trades.
        assert_eq!(stats.global.win_rate, 67.0);
        assert_eq!(stats.global.total_signals, 3);
    }

    #[test]
    fn channel_keys_use_wire_format() {
        let stats = aggregate(&crate::fixtures::history());
        assert!(stats.channels.contains_key("channel1"));
        assert!(stats.channels.contains_key("channel2"));
    }

    #[test]
    fn statistics_serialize_with_wire_field_names() {
        let stats = aggregate(&crate::fixtures::history());
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json["global"]["winRate"].is_number());
        assert!(json["global"]["avgRR"].is_number());
        assert!(json["global"]["totalSignals"].is_number());
        assert!(json["channels"]["channel1"]["bestTrade"].is_number());
        assert!(json["symbols"][0]["totalTrades"].is_number());
    }
}
