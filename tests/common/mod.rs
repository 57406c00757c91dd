//! Mock tool server implementing the wire contract the clients are built
//! against: `GET /health`, `GET /tools`, `POST /call` (200/404/500 with
//! `detail` bodies), and the CORS preflight on `/call`.

#![allow(dead_code)] // each test binary uses a different subset

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};

/// Request bookkeeping for cache and auth assertions.
#[derive(Debug, Default)]
pub struct MockState {
    /// Number of `GET /tools` requests served.
    pub tools_requests: AtomicUsize,
    /// Last `X-API-Key` header value seen on any endpoint.
    pub last_api_key: Mutex<Option<String>>,
}

impl MockState {
    fn record_api_key(&self, headers: &HeaderMap) {
        let key = headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        *self.last_api_key.lock().unwrap() = key;
    }
}

/// Spin up the mock server on a random port. Returns (base_url, state).
pub async fn spawn_mock_server() -> (String, Arc<MockState>) {
    let state = Arc::new(MockState::default());
    let app = Router::new()
        .route("/health", get(health))
        .route("/tools", get(tools))
        .route("/call", post(call).options(preflight))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), state)
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

async fn tools(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Json<Value> {
    state.record_api_key(&headers);
    state
        .tools_requests
        .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

    Json(json!({
        "tools": [
            {
                "name": "hello",
                "description": "Say hello to someone",
                "input_schema": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string", "description": "Name to greet"}
                    }
                },
                "output_schema": {"type": "string"}
            },
            {
                "name": "parse_le_to_mismo_json",
                "description": "Parses LE PDF and returns MISMO-compliant JSON with LLM metadata.",
                "input_schema": {
                    "type": "object",
                    "properties": {
                        "pdf_url": {"type": "string"}
                    },
                    "required": ["pdf_url"]
                },
                "output_schema": {"type": "object"}
            }
        ]
    }))
}

async fn call(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.record_api_key(&headers);

    let tool = body.get("tool").and_then(Value::as_str).unwrap_or_default();
    let input = body.get("input").cloned().unwrap_or_else(|| json!({}));

    match tool {
        "hello" => {
            let name = input
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("World");
            (
                StatusCode::OK,
                Json(json!({"output": format!("Hello, {name}!")})),
            )
        }
        "parse_le_to_mismo_json" => match input.get("pdf_url").and_then(Value::as_str) {
            Some(_) => (
                StatusCode::OK,
                Json(json!({
                    "output": {
                        "GFEOriginationCharges": {
                            "value": 2500,
                            "tolerance_bucket": "Limited Increase"
                        },
                        "APRDelta": 0.31
                    }
                })),
            ),
            None => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "Tool execution error: missing required field 'pdf_url'"})),
            ),
        },
        // Contract-violating tool for protocol error coverage: 200 without `output`
        "no_output" => (StatusCode::OK, Json(json!({"result": 42}))),
        other => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": format!("Tool '{other}' not found")})),
        ),
    }
}

async fn preflight() -> ([(header::HeaderName, &'static str); 3], StatusCode) {
    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "content-type, x-api-key"),
        ],
        StatusCode::OK,
    )
}
