// crates/dash-tui/src/data.rs

use std::sync::Arc;

use dash_client::{ApiClient, ClientError, Fetched};
use dash_core::{AccountInfo, CloseReceipt, HistoryEntry, Order, Statistics};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Requests from the UI loop into the data feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Account,
    Orders,
    History,
    Statistics,
    Health,
    CloseOrder(String),
}

/// Results flowing back to the UI loop.
#[derive(Debug)]
pub enum DataEvent {
    Account(Fetched<AccountInfo>),
    Orders(Fetched<Vec<Order>>),
    History(Fetched<Vec<HistoryEntry>>),
    Statistics(Fetched<Statistics>),
    Health(bool),
    OrderClosed {
        id: String,
        result: Result<CloseReceipt, ClientError>,
    },
}

/// Owns the API client and serves fetch requests for the UI loop.
pub struct DataFeed {
    client: Arc<ApiClient>,
    tx: UnboundedSender<DataEvent>,
}

impl DataFeed {
    pub fn new(client: ApiClient, tx: UnboundedSender<DataEvent>) -> Self {
        DataFeed {
            client: Arc::new(client),
            tx,
        }
    }

    /// Serve requests until the UI side hangs up.
    ///
    /// Each request runs in its own task, so fetches issued together
    /// stay in flight together; there is no ordering between them and
    /// the last answer per slot wins.
    pub async fn run(self, mut rx: UnboundedReceiver<FetchRequest>) {
        while let Some(req) = rx.recv().await {
            let client = self.client.clone();
            let tx = self.tx.clone();
            tokio::spawn(async move {
                serve(client, tx, req).await;
            });
        }
        debug!("data feed shutting down (request channel closed)");
    }
}

async fn serve(client: Arc<ApiClient>, tx: UnboundedSender<DataEvent>, req: FetchRequest) {
    let event = match req {
        FetchRequest::Account => DataEvent::Account(client.fetch_account_info().await),
        FetchRequest::Orders => DataEvent::Orders(client.fetch_orders().await),
        FetchRequest::History => DataEvent::History(client.fetch_history().await),
        FetchRequest::Statistics => DataEvent::Statistics(client.fetch_statistics().await),
        FetchRequest::Health => DataEvent::Health(client.health().await.is_ok()),
        FetchRequest::CloseOrder(id) => {
            let result = client.close_order(&id).await;
            DataEvent::OrderClosed { id, result }
        }
    };
    // The UI may already be gone during shutdown.
    let _ = tx.send(event);
}
