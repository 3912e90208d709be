//! The REST client itself.

use dash_core::{fixtures, AccountInfo, CloseReceipt, HealthStatus, HistoryEntry, Order, Statistics};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::fetched::Fetched;

/// REST client for the dashboard API.
///
/// One instance per base URL; cheap to share behind an `Arc`. Fetches
/// issued concurrently are not coordinated in any way.
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(ApiClient { config, http })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let value = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(value)
    }

    /// Account snapshot. Never fails; falls back to the fixture account.
    pub async fn fetch_account_info(&self) -> Fetched<AccountInfo> {
        match self.get_json("/account").await {
            Ok(account) => Fetched::live(account),
            Err(e) => {
                warn!(error = %e, "account fetch failed, serving fixture payload");
                Fetched::fallback(fixtures::account_info())
            }
        }
    }

    /// Open and pending orders. Never fails; falls back to the fixture book.
    pub async fn fetch_orders(&self) -> Fetched<Vec<Order>> {
        match self.get_json("/orders").await {
            Ok(orders) => Fetched::live(orders),
            Err(e) => {
                warn!(error = %e, "orders fetch failed, serving fixture payload");
                Fetched::fallback(fixtures::open_orders())
            }
        }
    }

    /// Closed trades, newest first. Never fails; falls back to the
    /// fixture history.
    pub async fn fetch_history(&self) -> Fetched<Vec<HistoryEntry>> {
        match self.get_json("/history").await {
            Ok(history) => Fetched::live(history),
            Err(e) => {
                warn!(error = %e, "history fetch failed, serving fixture payload");
                Fetched::fallback(fixtures::history())
            }
        }
    }

    /// Aggregate statistics. Never fails; falls back to the fixture block.
    pub async fn fetch_statistics(&self) -> Fetched<Statistics> {
        match self.get_json("/statistics").await {
            Ok(stats) => Fetched::live(stats),
            Err(e) => {
                warn!(error = %e, "statistics fetch failed, serving fixture payload");
                Fetched::fallback(fixtures::statistics())
            }
        }
    }

    /// Close an open position or drop a pending order.
    ///
    /// Unlike the read operations this propagates failure: the caller
    /// initiated a mutation and has to know whether it happened.
    pub async fn close_order(&self, order_id: &str) -> Result<CloseReceipt, ClientError> {
        let url = self.url(&format!("/orders/{order_id}/close"));
        debug!(%url, "POST");
        let response = self.http.post(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        // A 400 carries a receipt explaining the refusal; anything else
        // is reported as-is.
        let message = match response.json::<CloseReceipt>().await {
            Ok(receipt) => receipt.message,
            Err(_) => status.to_string(),
        };
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    /// Server liveness probe. There is no fixture equivalent of "the
    /// server is up", so this returns `Result` rather than [`Fetched`].
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.get_json("/health").await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dash_core::order::OrderStatus;

    use super::*;
    use crate::fetched::DataSource;

    /// Nothing listens here; every request fails at connect time.
    fn unreachable_client() -> ApiClient {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9/api".to_string(),
            timeout: Duration::from_millis(500),
        };
        ApiClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn account_fetch_falls_back_to_fixture_values() {
        let fetched = unreachable_client().fetch_account_info().await;
        assert_eq!(fetched.source, DataSource::Fallback);
        assert_eq!(fetched.value.balance, 10000.0);
        assert_eq!(fetched.value.equity, 10250.0);
        assert_eq!(fetched.value.free_margin, 8500.0);
    }

    #[tokio::test]
    async fn orders_fetch_falls_back_to_three_fixture_orders() {
        let fetched = unreachable_client().fetch_orders().await;
        assert_eq!(fetched.source, DataSource::Fallback);
        assert_eq!(fetched.value.len(), 3);
        let pending = fetched.value.iter().find(|o| o.id == "ORD003").unwrap();
        assert_eq!(pending.status, OrderStatus::Pending);
        assert_eq!(pending.pnl, 0.0);
    }

    #[tokio::test]
    async fn history_fetch_falls_back_to_three_fixture_entries() {
        let fetched = unreachable_client().fetch_history().await;
        assert_eq!(fetched.source, DataSource::Fallback);
        assert_eq!(fetched.value.len(), 3);
        let loser = fetched.value.iter().find(|h| h.id == "HIS003").unwrap();
        assert_eq!(loser.pnl, -12.00);
    }

    #[tokio::test]
    async fn statistics_fetch_falls_back_to_fixture_block() {
        let fetched = unreachable_client().fetch_statistics().await;
        assert_eq!(fetched.source, DataSource::Fallback);
        assert_eq!(fetched.value.global.total_signals, 45);
    }

    #[tokio::test]
    async fn close_order_propagates_transport_failure() {
        let result = unreachable_client().close_order("ORD001").await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }

    #[tokio::test]
    async fn health_propagates_transport_failure() {
        assert!(unreachable_client().health().await.is_err());
    }
}
