//! Shared dashboard state
//!
//! Environment selection is owned by the navbar selector and injected into
//! the routed views via context, so the fetch-triggering logic never reads
//! ambient globals.

use leptos::RwSignal;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Currently selected environment, provided via context by `App`.
///
/// `None` until the environment list has loaded and a selection exists.
#[derive(Clone, Copy)]
pub struct CurrentEnv(pub RwSignal<Option<String>>);

/// Navigation state carried from the application list to the detail screen.
///
/// Rides in the router's history state as a JSON string; field names are
/// camelCase on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSelection {
    pub app_name: String,
    pub env_name: String,
}

impl AppSelection {
    /// Encode for the router's history state.
    pub fn to_history_state(&self) -> JsValue {
        JsValue::from_str(&serde_json::to_string(self).unwrap_or_default())
    }

    /// Decode a history state previously written by [`to_history_state`].
    ///
    /// Returns `None` for missing, foreign, or malformed state.
    ///
    /// [`to_history_state`]: AppSelection::to_history_state
    pub fn from_history_state(value: &JsValue) -> Option<Self> {
        value
            .as_string()
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_uses_camel_case_wire_names() {
        let selection = AppSelection {
            app_name: "demo-app".to_string(),
            env_name: "default".to_string(),
        };

        let json = serde_json::to_string(&selection).unwrap();
        assert!(json.contains("\"appName\":\"demo-app\""));
        assert!(json.contains("\"envName\":\"default\""));
    }

    #[test]
    fn test_selection_round_trip() {
        let selection = AppSelection {
            app_name: "demo-app".to_string(),
            env_name: "staging".to_string(),
        };

        let json = serde_json::to_string(&selection).unwrap();
        let back: AppSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, selection);
    }

    #[test]
    fn test_malformed_state_is_rejected() {
        assert!(serde_json::from_str::<AppSelection>("{\"appName\":1}").is_err());
    }
}
