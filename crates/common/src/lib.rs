use thiserror::Error;

pub mod types;
pub mod utils;
pub mod reporting;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Outbound calls to the AI service.
pub mod upstream {
    use super::*;

    /// GET `url` and decode the body as JSON. Non-2xx statuses are errors;
    /// their bodies are not read.
    pub async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<serde_json::Value, CoreError> {
        let resp = client
            .get(url)
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Status(status.as_u16()));
        }
        let json = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| CoreError::Parse(e.to_string()))?;
        Ok(json)
    }

    /// `{base_url}/health`
    pub async fn fetch_health(client: &reqwest::Client, base_url: &str) -> Result<serde_json::Value, CoreError> {
        let url = format!("{}/health", base_url.trim_end_matches('/'));
        fetch_json(client, &url).await
    }
}
