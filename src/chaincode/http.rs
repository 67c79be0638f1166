//! HTTP transport for the chaincode - maps HTTP requests to invocations.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /invoke` - body is an [`Invocation`]; returns a [`Response`].
//! - `GET /health` - returns `{ "ok": true, "commands": [...] }`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::warn;

use crate::ledger::Ledger;

use super::response::{Invocation, Response};
use super::service::Chaincode;

/// Build an axum `Router` that dispatches invocations to the chaincode.
pub fn router<L: Ledger + 'static>(chaincode: Arc<Chaincode<L>>) -> Router {
    Router::new()
        .route("/health", get(health_handler::<L>))
        .route("/invoke", post(invoke_handler::<L>))
        .with_state(chaincode)
}

/// Serve the chaincode over HTTP at the given address (e.g. `"0.0.0.0:7052"`).
pub async fn serve<L: Ledger + 'static>(
    chaincode: Arc<Chaincode<L>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(chaincode);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health_handler<L: Ledger + 'static>(
    State(chaincode): State<Arc<Chaincode<L>>>,
) -> impl IntoResponse {
    Json(json!({ "ok": true, "commands": chaincode.commands() }))
}

async fn invoke_handler<L: Ledger + 'static>(
    State(chaincode): State<Arc<Chaincode<L>>>,
    Json(invocation): Json<Invocation>,
) -> impl IntoResponse {
    match chaincode.dispatch(&invocation.function, &invocation.args) {
        Ok(payload) => (StatusCode::OK, Json(Response::success(payload))).into_response(),
        Err(err) => {
            warn!(function = %invocation.function, error = %err, "invoke failed");
            let status =
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(Response::error(&err))).into_response()
        }
    }
}
