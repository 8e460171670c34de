//! Common types shared between the appdeck backend contract and appdeck-ui

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A deployed application, as returned by `GET /api/envs/{env}/apps/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    /// Creation timestamp, RFC 3339 on the wire.
    pub created: DateTime<Utc>,
    /// Lifecycle label reported by the backend. Open-ended: the UI
    /// recognizes `Deployed` and `Staging`, anything else renders with the
    /// unknown accent.
    pub status: String,
    /// Workload-type label backing this application.
    pub workload: String,
    #[serde(default)]
    pub traits: Vec<String>,
}

/// A named deployment target whose applications are listed together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Environment {
    pub name: String,
    pub namespace: String,
}

/// Identifying metadata of the custom resource backing a workload type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CrdInfo {
    pub api_version: String,
    pub kind: String,
}

/// One configurable setting exposed by a workload type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Pre-filled value, any JSON scalar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Descriptive text shown when no default exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// A workload type and the settings it exposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadDefinition {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "crdInfo")]
    pub crd_info: Option<CrdInfo>,
}

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Environment not found: {0}")]
    EnvNotFound(String),

    #[error("Application not found: {0}")]
    AppNotFound(String),

    #[error("Workload type not found: {0}")]
    WorkloadNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_wire_payload() {
        let json = r#"{
            "name": "demo-app",
            "created": "2021-03-01T10:30:00Z",
            "status": "Deployed",
            "workload": "webservice",
            "traits": ["scaler", "route"]
        }"#;

        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.name, "demo-app");
        assert_eq!(app.status, "Deployed");
        assert_eq!(app.workload, "webservice");
        assert_eq!(app.traits, vec!["scaler", "route"]);
    }

    #[test]
    fn test_application_traits_default_empty() {
        let json = r#"{
            "name": "bare-app",
            "created": "2021-03-01T10:30:00Z",
            "status": "Staging",
            "workload": "task"
        }"#;

        let app: Application = serde_json::from_str(json).unwrap();
        assert!(app.traits.is_empty());
    }

    #[test]
    fn test_application_round_trip() {
        let app = Application {
            name: "demo-app".to_string(),
            created: "2021-03-01T10:30:00Z".parse().unwrap(),
            status: "Deployed".to_string(),
            workload: "webservice".to_string(),
            traits: vec!["scaler".to_string()],
        };

        let json = serde_json::to_string(&app).unwrap();
        let deserialized: Application = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.name, app.name);
        assert_eq!(deserialized.created, app.created);
        assert_eq!(deserialized.traits, app.traits);
    }

    #[test]
    fn test_crd_info_camel_case_fields() {
        let info = CrdInfo {
            api_version: "core.oam.dev/v1alpha2".to_string(),
            kind: "ContainerizedWorkload".to_string(),
        };

        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"apiVersion\""));
        assert!(json.contains("\"kind\""));

        let back: CrdInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn test_parameter_optional_fields_absent() {
        let param: Parameter = serde_json::from_str(r#"{"name": "port"}"#).unwrap();
        assert_eq!(param.name, "port");
        assert!(param.default.is_none());
        assert!(param.usage.is_none());
        assert!(!param.required);
    }

    #[test]
    fn test_parameter_default_keeps_json_kind() {
        let param: Parameter =
            serde_json::from_str(r#"{"name": "replicas", "default": 3}"#).unwrap();
        assert_eq!(param.default, Some(serde_json::json!(3)));
    }

    #[test]
    fn test_workload_definition_wire_payload() {
        let json = r#"{
            "name": "webservice",
            "parameters": [
                {"name": "name", "required": true},
                {"name": "image", "usage": "container image to run"}
            ],
            "crdInfo": {"apiVersion": "apps/v1", "kind": "Deployment"}
        }"#;

        let def: WorkloadDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.name, "webservice");
        assert_eq!(def.parameters.len(), 2);
        assert_eq!(
            def.crd_info,
            Some(CrdInfo {
                api_version: "apps/v1".to_string(),
                kind: "Deployment".to_string(),
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Error::AppNotFound("demo-app".to_string());
        assert_eq!(err.to_string(), "Application not found: demo-app");

        let err = Error::EnvNotFound("default".to_string());
        assert_eq!(err.to_string(), "Environment not found: default");
    }
}
