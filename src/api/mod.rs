pub mod chat;
pub mod error;
pub mod extract;
pub mod geo;

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::ax_state::AppState;

/// 三个 API 接口 + 前端静态文件 (`/` -> index.html，缺失文件 404)
pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api/geocode", get(geo::geocode))
        .route("/api/district", get(geo::district))
        .route("/api/deepseek/chat", post(chat::deepseek_chat))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
