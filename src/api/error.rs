use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::infra::upstream::UpstreamError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("缺少参数")]
    MissingParams,

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    InvalidQuery(#[from] QueryRejection),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingParams => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": "缺少参数" }))).into_response()
            }
            // 沿用 axum 的状态码 (400/415/422)，正文统一为 JSON
            ApiError::InvalidBody(rejection) => {
                rejected(rejection.status(), rejection.body_text())
            }
            ApiError::InvalidQuery(rejection) => {
                rejected(rejection.status(), rejection.body_text())
            }
            ApiError::Upstream(err) => {
                // 细节只进日志，不回给前端
                error!("上游调用失败: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({ "error": "上游服务调用失败" })),
                )
                    .into_response()
            }
        }
    }
}

fn rejected(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
