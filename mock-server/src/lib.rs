use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub image: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Envelope {
    pub items: Vec<FeedItem>,
}

pub type Db = Arc<RwLock<Vec<FeedItem>>>;

pub fn app() -> Router {
    app_with_items(Vec::new())
}

pub fn app_with_items(items: Vec<FeedItem>) -> Router {
    let db: Db = Arc::new(RwLock::new(items));
    Router::new()
        .route("/feed", get(list_feed).post(add_item))
        .route("/status/{code}", get(empty_with_status))
        .route("/malformed", get(malformed))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_items(listener: TcpListener, items: Vec<FeedItem>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_items(items)).await
}

async fn list_feed(State(db): State<Db>) -> Json<Envelope> {
    let items = db.read().await;
    tracing::debug!(count = items.len(), "serving feed");
    Json(Envelope {
        items: items.clone(),
    })
}

async fn add_item(State(db): State<Db>, Json(item): Json<FeedItem>) -> (StatusCode, Json<FeedItem>) {
    db.write().await.push(item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn empty_with_status(Path(code): Path<u16>) -> Result<(StatusCode, Json<Envelope>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    // hyper rewrites a 1xx final response to 500, so it cannot be echoed.
    if status.is_informational() {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok((status, Json(Envelope::default())))
}

async fn malformed() -> &'static str {
    "InvalidJson"
}
