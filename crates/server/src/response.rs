use serde::{Deserialize, Serialize};
use service::catalog::domain::CatalogEntry;

/// JSON envelope shared by every endpoint; absent fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<CatalogEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn services(services: Vec<CatalogEntry>) -> Self {
        Self { success: true, services: Some(services), ..Default::default() }
    }

    pub fn request_created(request_id: i32) -> Self {
        Self {
            success: true,
            message: Some("Service request submitted".into()),
            request_id: Some(request_id),
            ..Default::default()
        }
    }

    pub fn data(data: serde_json::Value) -> Self {
        Self { success: true, data: Some(data), ..Default::default() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()), ..Default::default() }
    }
}
