//! API client for communicating with the appdeck backend

use appdeck_common::{Application, Environment, WorkloadDefinition};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::UiConfig;

/// Resolve a path under the configured API base URL.
fn endpoint(path: &str) -> String {
    let config = UiConfig::load();
    format!("{}{}", config.api_url, path)
}

/// Generic JSON fetch helper
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = reqwasm::http::Request::get(&endpoint(path))
        .send()
        .await
        .map_err(|e| ApiError { message: e.to_string() })?;

    if response.ok() {
        response.json().await.map_err(|e| ApiError { message: e.to_string() })
    } else {
        Err(ApiError { message: format!("HTTP {}", response.status()) })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

impl From<appdeck_common::Error> for ApiError {
    fn from(err: appdeck_common::Error) -> Self {
        ApiError { message: err.to_string() }
    }
}

/// Get all environments
pub async fn list_environments() -> Result<Vec<Environment>, ApiError> {
    fetch_json("/api/envs/").await
}

/// Get the applications deployed in an environment
pub async fn list_applications(env_name: &str) -> Result<Vec<Application>, ApiError> {
    fetch_json(&format!("/api/envs/{}/apps/", urlencoding::encode(env_name))).await
}

/// Get a workload type definition
pub async fn get_workload_definition(name: &str) -> Result<WorkloadDefinition, ApiError> {
    fetch_json(&format!("/api/workloads/{}", urlencoding::encode(name))).await
}
