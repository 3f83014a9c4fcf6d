use axum::{extract::State, Json};
use common::upstream;
use service::errors::ServiceError;

use crate::errors::{ApiError, Operation};
use crate::response::ApiResponse;
use crate::state::ServerState;

/// 代理上游 AI 服务的健康检查；失败时不透传上游状态
#[utoipa::path(get, path = "/api/ai/health", tag = "health",
    responses((status = 200, description = "Upstream healthy; body forwarded under `data`", body = crate::openapi::AiHealthResponseDoc),
              (status = 500, description = "Upstream unavailable")))]
pub async fn ai_health(State(state): State<ServerState>) -> Result<Json<ApiResponse>, ApiError> {
    match upstream::fetch_health(&state.ai.client, &state.ai.endpoint).await {
        Ok(data) => Ok(Json(ApiResponse::data(data))),
        Err(e) => Err(ApiError::from_service(ServiceError::from(e), Operation::AiHealth, state.reporter.as_ref())),
    }
}
