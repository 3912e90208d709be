//! Account snapshot served by `GET /account`.

use serde::{Deserialize, Serialize};

/// Trading account snapshot.
///
/// All three figures are denominated in the account currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub balance: f64,
    pub equity: f64,
    pub free_margin: f64,
}

impl AccountInfo {
    /// Floating P&L implied by the difference between equity and balance.
    pub fn floating_pnl(&self) -> f64 {
        self.equity - self.balance
    }
}
