// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Minimal local HTTP upstream for provider client tests

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One request the upstream received
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path_segment: String,
    pub headers: HeaderMap,
    pub body: Value,
}

#[derive(Clone)]
pub struct Upstream {
    status: StatusCode,
    reply: Value,
    pub seen: Arc<Mutex<Vec<Recorded>>>,
}

impl Upstream {
    pub fn new(status: StatusCode, reply: Value) -> Self {
        Self {
            status,
            reply,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn last(&self) -> Recorded {
        self.seen.lock().unwrap().last().cloned().expect("no request recorded")
    }
}

async fn record(
    State(upstream): State<Upstream>,
    Path(segment): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    upstream.seen.lock().unwrap().push(Recorded {
        path_segment: segment,
        headers,
        body,
    });
    (upstream.status, Json(upstream.reply.clone()))
}

/// Serve `upstream` on an ephemeral port; returns the base URL
pub async fn spawn(upstream: Upstream) -> String {
    let app = Router::new()
        .route("/v1beta/models/:call", post(record))
        .route("/v1/chat/:call", post(record))
        .with_state(upstream);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
