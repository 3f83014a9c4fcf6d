use serde::{Deserialize, Serialize};

use crate::auth::domain::de;

/// One catalog entry as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<models::catalog_service::ServiceListing> for CatalogEntry {
    fn from(s: models::catalog_service::ServiceListing) -> Self {
        Self { id: s.id, name: s.name, description: s.description }
    }
}

/// Body of the list operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListServicesInput {
    #[serde(default, deserialize_with = "de::lenient_id")]
    pub user_id: Option<i32>,
    #[serde(default, deserialize_with = "de::non_empty_string")]
    pub token: Option<String>,
}

/// Body of the submit operation. Every field is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestInput {
    #[serde(default, deserialize_with = "de::lenient_id")]
    pub user_id: Option<i32>,
    #[serde(default, deserialize_with = "de::non_empty_string")]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_id")]
    pub service_id: Option<i32>,
    #[serde(default, deserialize_with = "de::non_empty_string")]
    pub details: Option<String>,
}

/// Row to append to the request log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServiceRequest {
    pub user_id: i32,
    pub service_id: i32,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRequest {
    pub request_id: i32,
}

/// Result of the catalog bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Catalog was empty; this many rows were inserted.
    Seeded(u64),
    /// Catalog already held this many services; nothing was inserted.
    AlreadySeeded(u64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submit_input_accepts_numeric_strings() {
        let input: SubmitRequestInput = serde_json::from_value(json!({
            "userId": "3", "token": "abc", "serviceId": 4, "details": "please"
        }))
        .expect("decodes");
        assert_eq!(input.user_id, Some(3));
        assert_eq!(input.service_id, Some(4));
        assert_eq!(input.token.as_deref(), Some("abc"));
        assert_eq!(input.details.as_deref(), Some("please"));
    }

    #[test]
    fn malformed_fields_decode_as_missing() {
        let input: SubmitRequestInput = serde_json::from_value(json!({
            "userId": "three", "token": 12, "serviceId": null, "details": ""
        }))
        .expect("decodes");
        assert!(input.user_id.is_none());
        assert!(input.token.is_none());
        assert!(input.service_id.is_none());
        assert!(input.details.is_none());
    }

    #[test]
    fn whitespace_details_are_kept_verbatim() {
        let input: SubmitRequestInput = serde_json::from_value(json!({
            "userId": 1, "token": "t", "serviceId": 2, "details": "   "
        }))
        .expect("decodes");
        assert_eq!(input.details.as_deref(), Some("   "));
    }

    #[test]
    fn list_input_with_empty_body() {
        let input: ListServicesInput = serde_json::from_value(json!({})).expect("decodes");
        assert!(input.user_id.is_none() && input.token.is_none());
    }

    #[test]
    fn token_is_not_trimmed() {
        let input: ListServicesInput = serde_json::from_value(json!({"userId": 1, "token": " t "})).expect("decodes");
        assert_eq!(input.token.as_deref(), Some(" t "));
    }
}
