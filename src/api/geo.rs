use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::api::error::ApiError;
use crate::api::extract::QueryPairs;
use crate::ax_state::AppState;
use crate::models::context::{required, DistrictQuery, GeocodeQuery};

/// 逆地理编码接口
pub async fn geocode(
    State(state): State<Arc<AppState>>,
    QueryPairs(pairs): QueryPairs,
) -> Result<Json<Value>, ApiError> {
    let params = GeocodeQuery::from_pairs(&pairs);
    let (lng, lat) = match (required(&params.lng), required(&params.lat)) {
        (Some(lng), Some(lat)) => (lng, lat),
        _ => return Err(ApiError::MissingParams),
    };

    info!("逆地理编码: lng={}, lat={}", lng, lat);
    let body = state.amap.regeo(lng, lat).await?;
    Ok(Json(body))
}

/// 行政区划查询接口
pub async fn district(
    State(state): State<Arc<AppState>>,
    QueryPairs(pairs): QueryPairs,
) -> Result<Json<Value>, ApiError> {
    let params = DistrictQuery::from_pairs(&pairs);
    let adcode = required(&params.adcode).ok_or(ApiError::MissingParams)?;

    info!("行政区划查询: adcode={}", adcode);
    let body = state.amap.district(adcode).await?;
    Ok(Json(body))
}
