//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use asset_ledger::chaincode;
use asset_ledger::{Chaincode, InMemoryLedger, Invocation, Response};
use serde_json::json;

/// Bind to port 0 and return the actual address.
async fn start_server(chaincode: Arc<Chaincode<InMemoryLedger>>) -> String {
    let app = chaincode::router(chaincode);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn service() -> Arc<Chaincode<InMemoryLedger>> {
    Arc::new(Chaincode::new(InMemoryLedger::new()))
}

#[tokio::test]
async fn health_check() {
    let base = start_server(service()).await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["commands"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn create_and_query_car() {
    let base = start_server(service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/invoke"))
        .json(&Invocation::new("createCar", ["CAR0", "Toyota", "Prius", "blue", "Tomoko"]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .post(format!("{base}/invoke"))
        .json(&json!({ "function": "queryCar", "args": ["CAR0"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Response = resp.json().await.unwrap();
    let car: serde_json::Value = serde_json::from_slice(&body.payload).unwrap();
    assert_eq!(car["owner"], "Tomoko");
}

#[tokio::test]
async fn errors_map_to_status_codes() {
    let base = start_server(service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/invoke"))
        .json(&json!({ "function": "queryCar", "args": ["MISSING"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Response = resp.json().await.unwrap();
    assert_eq!(body.status, chaincode::ERROR);
    assert!(body.message.contains("MISSING"));

    let resp = client
        .post(format!("{base}/invoke"))
        .json(&json!({ "function": "createUser", "args": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}
