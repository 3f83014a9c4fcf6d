use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListServicesRequest { pub user_id: i32, pub token: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestRequest { pub user_id: i32, pub token: String, pub service_id: i32, pub details: String }

/// Legacy multiplexed body: `action` is `getServices` or `requestService`,
/// remaining fields as for the dedicated routes.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub action: String,
    pub user_id: i32,
    pub token: String,
    pub service_id: Option<i32>,
    pub details: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ServiceDoc { pub id: i32, pub name: String, pub description: String }

#[derive(Serialize, ToSchema)]
pub struct ServicesResponseDoc { pub success: bool, pub services: Vec<ServiceDoc> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestCreatedDoc { pub success: bool, pub message: String, pub request_id: i32 }

#[derive(Serialize, ToSchema)]
pub struct AiHealthResponseDoc {
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::ai::ai_health,
        crate::routes::services::list_services,
        crate::routes::services::request_service,
        crate::routes::services::dispatch_action,
    ),
    components(
        schemas(
            HealthResponse,
            ListServicesRequest,
            SubmitRequestRequest,
            ActionRequest,
            ServiceDoc,
            ServicesResponseDoc,
            RequestCreatedDoc,
            AiHealthResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "services")
    )
)]
pub struct ApiDoc;
