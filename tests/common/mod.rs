#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

/// What the fake API answers on `/stats`.
#[derive(Clone)]
pub enum StatsReply {
    Body(Value),
    Status(StatusCode),
    Garbage,
}

struct Backend {
    stats: StatsReply,
    posts: Vec<Value>,
    next_id: u64,
    text_ids: VecDeque<String>,
    create_gate: Option<Arc<Notify>>,
}

type Shared = Arc<Mutex<Backend>>;

pub struct FakeApi {
    pub base_url: String,
    backend: Shared,
}

impl FakeApi {
    pub async fn post_count(&self) -> usize {
        self.backend.lock().await.posts.len()
    }

    pub async fn post_ids(&self) -> Vec<Value> {
        self.backend
            .lock()
            .await
            .posts
            .iter()
            .filter_map(|post| post.get("id").cloned())
            .collect()
    }
}

pub fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// Base URL of an API nobody is listening on.
pub fn unreachable_api_url() -> String {
    format!("http://127.0.0.1:{}/api", pick_free_port())
}

pub async fn spawn_fake_api(stats: StatsReply) -> FakeApi {
    spawn(stats, Vec::new(), None).await
}

/// Like `spawn_fake_api`, but the first creates get the given string ids, in order.
pub async fn spawn_fake_api_with_ids(stats: StatsReply, text_ids: Vec<&str>) -> FakeApi {
    spawn(stats, text_ids, None).await
}

/// Like `spawn_fake_api`, but each create waits for one `notify_one` on the returned gate.
pub async fn spawn_fake_api_gated(stats: StatsReply) -> (FakeApi, Arc<Notify>) {
    let gate = Arc::new(Notify::new());
    (spawn(stats, Vec::new(), Some(Arc::clone(&gate))).await, gate)
}

async fn spawn(stats: StatsReply, text_ids: Vec<&str>, create_gate: Option<Arc<Notify>>) -> FakeApi {
    let backend: Shared = Arc::new(Mutex::new(Backend {
        stats,
        posts: Vec::new(),
        next_id: 0,
        text_ids: text_ids.into_iter().map(str::to_string).collect(),
        create_gate,
    }));

    let app = Router::new()
        .route("/api/stats", get(stats_handler))
        .route("/api/schedule", get(list_handler).post(create_handler))
        .route("/api/schedule/:id", delete(delete_handler))
        .with_state(Arc::clone(&backend));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake api");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake api crashed");
    });

    FakeApi {
        base_url: format!("http://{addr}/api"),
        backend,
    }
}

async fn stats_handler(State(backend): State<Shared>) -> Response {
    match backend.lock().await.stats.clone() {
        StatsReply::Body(body) => Json(body).into_response(),
        StatsReply::Status(status) => status.into_response(),
        StatsReply::Garbage => (
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            "{not json",
        )
            .into_response(),
    }
}

async fn list_handler(State(backend): State<Shared>) -> Json<Vec<Value>> {
    Json(backend.lock().await.posts.clone())
}

async fn create_handler(State(backend): State<Shared>, Json(mut body): Json<Value>) -> Response {
    let gate = backend.lock().await.create_gate.clone();
    if let Some(gate) = gate {
        gate.notified().await;
    }
    let mut backend = backend.lock().await;
    let id = match backend.text_ids.pop_front() {
        Some(id) => json!(id),
        None => {
            backend.next_id += 1;
            json!(backend.next_id)
        }
    };
    match body.as_object_mut() {
        Some(fields) => {
            fields.insert("id".to_string(), id);
        }
        None => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    }
    backend.posts.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn delete_handler(State(backend): State<Shared>, Path(id): Path<String>) -> StatusCode {
    let mut backend = backend.lock().await;
    let before = backend.posts.len();
    backend.posts.retain(|post| match post.get("id") {
        Some(Value::String(text)) => *text != id,
        Some(Value::Number(number)) => number.to_string() != id,
        _ => true,
    });
    if backend.posts.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}
