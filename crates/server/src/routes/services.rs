use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use serde_json::Value;
use service::catalog::domain::{ListServicesInput, SubmitRequestInput};

use crate::errors::{ApiError, Operation};
use crate::response::ApiResponse;
use crate::state::ServerState;

type ApiResult = Result<(StatusCode, Json<ApiResponse>), ApiError>;

async fn list(state: &ServerState, input: ListServicesInput) -> ApiResult {
    let services = state
        .catalog
        .list_services(input)
        .await
        .map_err(|e| ApiError::from_service(e, Operation::ListServices, state.reporter.as_ref()))?;
    Ok((StatusCode::OK, Json(ApiResponse::services(services))))
}

async fn submit(state: &ServerState, input: SubmitRequestInput) -> ApiResult {
    let created = state
        .catalog
        .submit_request(input)
        .await
        .map_err(|e| ApiError::from_service(e, Operation::RequestService, state.reporter.as_ref()))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::request_created(created.request_id))))
}

/// 列出全部服务（按名称升序）
#[utoipa::path(post, path = "/api/services/list", tag = "services", request_body = crate::openapi::ListServicesRequest,
    responses((status = 200, description = "Services ordered by name", body = crate::openapi::ServicesResponseDoc),
              (status = 401, description = "Missing or invalid credentials"),
              (status = 500, description = "Storage failure")))]
pub async fn list_services(
    State(state): State<ServerState>,
    body: Result<Json<ListServicesInput>, JsonRejection>,
) -> ApiResult {
    let Json(input) = body.map_err(|e| ApiError::invalid_body(&e))?;
    list(&state, input).await
}

/// 提交服务请求
#[utoipa::path(post, path = "/api/services/requests", tag = "services", request_body = crate::openapi::SubmitRequestRequest,
    responses((status = 201, description = "Request created", body = crate::openapi::RequestCreatedDoc),
              (status = 400, description = "Missing required parameters"),
              (status = 401, description = "Invalid authentication"),
              (status = 404, description = "Service not found"),
              (status = 500, description = "Storage failure")))]
pub async fn request_service(
    State(state): State<ServerState>,
    body: Result<Json<SubmitRequestInput>, JsonRejection>,
) -> ApiResult {
    let Json(input) = body.map_err(|e| ApiError::invalid_body(&e))?;
    submit(&state, input).await
}

/// 兼容旧接口：按 `action` 字段分发到 list / submit
#[utoipa::path(post, path = "/api/services", tag = "services", request_body = crate::openapi::ActionRequest,
    responses((status = 200, description = "getServices result"),
              (status = 201, description = "requestService result"),
              (status = 400, description = "Invalid action or parameters")))]
pub async fn dispatch_action(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    let Json(body) = body.map_err(|e| ApiError::invalid_body(&e))?;
    let action = body.get("action").and_then(Value::as_str).map(str::to_owned);
    match action.as_deref() {
        Some("getServices") => {
            let input = serde_json::from_value(body).map_err(|_| ApiError::invalid_action())?;
            list(&state, input).await
        }
        Some("requestService") => {
            let input = serde_json::from_value(body).map_err(|_| ApiError::invalid_action())?;
            submit(&state, input).await
        }
        other => {
            tracing::warn!(action = ?other, "unknown action");
            Err(ApiError::invalid_action())
        }
    }
}
