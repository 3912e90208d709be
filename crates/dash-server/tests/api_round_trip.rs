// crates/dash-server/tests/api_round_trip.rs
//
// Full round trips: sim-backed server on an ephemeral port, exercised
// through the typed client.

use std::sync::Arc;

use dash_client::{ApiClient, ApiConfig, ClientError, DataSource};
use dash_core::order::OrderStatus;
use dash_server::server::{router, AppState};
use dash_server::sim::SimGateway;
use tokio::net::TcpListener;

async fn spawn_server() -> ApiClient {
    let state = AppState {
        gateway: Arc::new(SimGateway::seeded()),
    };
    let app = router(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ApiClient::new(ApiConfig::with_base_url(format!("http://{addr}/api"))).unwrap()
}

#[tokio::test]
async fn read_operations_serve_live_seeded_data() {
    let client = spawn_server().await;

    let account = client.fetch_account_info().await;
    assert_eq!(account.source, DataSource::Live);
    assert_eq!(account.value.balance, 10000.0);
    assert_eq!(account.value.equity, 10250.0);
    assert_eq!(account.value.free_margin, 8500.0);

    let orders = client.fetch_orders().await;
    assert_eq!(orders.source, DataSource::Live);
    assert_eq!(orders.value.len(), 3);
    let pending = orders.value.iter().find(|o| o.id == "ORD003").unwrap();
    assert_eq!(pending.status, OrderStatus::Pending);
    assert_eq!(pending.pnl, 0.0);

    let history = client.fetch_history().await;
    assert_eq!(history.source, DataSource::Live);
    assert_eq!(history.value.len(), 3);
    let loser = history.value.iter().find(|h| h.id == "HIS003").unwrap();
    assert_eq!(loser.pnl, -12.00);

    let stats = client.fetch_statistics().await;
    assert_eq!(stats.source, DataSource::Live);
    assert_eq!(stats.value.global.total_signals, 3);
    assert_eq!(stats.value.global.win_rate, 67.0);
}

#[tokio::test]
async fn health_reports_a_connected_gateway() {
    let client = spawn_server().await;
    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert!(health.gateway_connected);
}

#[tokio::test]
async fn close_order_mutates_server_state() {
    let client = spawn_server().await;

    let receipt = client.close_order("ORD001").await.unwrap();
    assert!(receipt.success);

    let orders = client.fetch_orders().await;
    assert_eq!(orders.value.len(), 2);
    assert!(orders.value.iter().all(|o| o.id != "ORD001"));

    let history = client.fetch_history().await;
    assert_eq!(history.value.len(), 4);
}

#[tokio::test]
async fn closing_twice_is_rejected_with_a_reason() {
    let client = spawn_server().await;

    client.close_order("ORD003").await.unwrap();
    let err = client.close_order("ORD003").await.unwrap_err();
    match err {
        ClientError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("ORD003"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}
