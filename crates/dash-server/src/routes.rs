//! Request handlers for the REST surface.
//!
//! Read endpoints answer with the record payloads directly; errors map
//! to a `{ "error": ... }` body. The close endpoint always answers with
//! a receipt, HTTP 400 when the gateway refuses.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use dash_core::{CloseReceipt, HealthStatus};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::gateway::GatewayError;
use crate::server::AppState;

const DEFAULT_HISTORY_DAYS: i64 = 7;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    days: Option<i64>,
}

fn error_status(err: &GatewayError) -> StatusCode {
    match err {
        GatewayError::OrderNotFound(_) => StatusCode::BAD_REQUEST,
        GatewayError::NotConnected => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn read_error(err: GatewayError) -> Response {
    warn!(error = %err, "read endpoint failed");
    (
        error_status(&err),
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

pub async fn account(State(state): State<AppState>) -> Response {
    match state.gateway.account_info() {
        Ok(account) => Json(account).into_response(),
        Err(e) => read_error(e),
    }
}

pub async fn orders(State(state): State<AppState>) -> Response {
    match state.gateway.open_orders() {
        Ok(orders) => Json(orders).into_response(),
        Err(e) => read_error(e),
    }
}

pub async fn history(State(state): State<AppState>, Query(query): Query<HistoryQuery>) -> Response {
    let days = query.days.unwrap_or(DEFAULT_HISTORY_DAYS).max(0);
    match state.gateway.history(days) {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => read_error(e),
    }
}

pub async fn statistics(State(state): State<AppState>) -> Response {
    match state.gateway.statistics() {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => read_error(e),
    }
}

pub async fn close_order(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.gateway.close_order(&id) {
        Ok(receipt) => Json(receipt).into_response(),
        Err(e) => {
            warn!(order_id = %id, error = %e, "close refused");
            (
                StatusCode::BAD_REQUEST,
                Json(CloseReceipt::rejected(e.to_string())),
            )
                .into_response()
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        gateway_connected: state.gateway.is_connected(),
        timestamp: Utc::now(),
    })
}
