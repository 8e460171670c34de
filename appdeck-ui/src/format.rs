//! Rendering-independent presentation helpers for the dashboard screens.

use appdeck_common::Parameter;
use chrono::{DateTime, FixedOffset, Utc};

/// Card timestamps are pinned to UTC-6 so every viewer sees the same
/// wall-clock string.
const CARD_UTC_OFFSET_HOURS: i32 = -6;

/// Height contributed by each trait to a card's layout spacer.
const TRAIT_ROW_PX: usize = 43;

/// Settings item reserved for internal use, never shown to the user.
pub const RESERVED_SETTING: &str = "name";

/// Format an application's creation time as `YYYY-MM-DD HH:mm:ss` at the
/// pinned card offset.
pub fn format_created(created: &DateTime<Utc>) -> String {
    let offset = FixedOffset::east_opt(CARD_UTC_OFFSET_HOURS * 3600)
        .expect("card offset is in range");
    created
        .with_timezone(&offset)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// CSS accent class for an application's lifecycle status.
pub fn status_accent_class(status: &str) -> &'static str {
    match status {
        "Deployed" => "status-deployed",
        "Staging" => "status-staging",
        _ => "status-unknown",
    }
}

/// Height of the card's alignment spacer for a given trait count.
pub fn trait_spacer_height(trait_count: usize) -> String {
    format!("{}px", trait_count * TRAIT_ROW_PX)
}

/// Settings rows shown on the workload screen: the reserved item is dropped,
/// everything else keeps its input order.
pub fn visible_settings(settings: &[Parameter]) -> Vec<&Parameter> {
    settings
        .iter()
        .filter(|item| item.name != RESERVED_SETTING)
        .collect()
}

/// Value column of a settings row: the default when one exists, else the
/// usage text, else blank. A null or empty-string default counts as absent;
/// numeric and boolean defaults are displayed as written.
pub fn setting_display_value(setting: &Parameter) -> String {
    if let Some(value) = &setting.default {
        match value {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) if s.is_empty() => {}
            serde_json::Value::String(s) => return s.clone(),
            other => return other.to_string(),
        }
    }
    setting.usage.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn param(name: &str, default: Option<serde_json::Value>, usage: Option<&str>) -> Parameter {
        Parameter {
            name: name.to_string(),
            default,
            usage: usage.map(str::to_string),
            required: false,
        }
    }

    #[test]
    fn test_format_created_is_pinned_to_minus_six_hours() {
        let created: DateTime<Utc> = "2021-03-01T10:30:00Z".parse().unwrap();
        assert_eq!(format_created(&created), "2021-03-01 04:30:00");
    }

    #[test]
    fn test_format_created_crosses_midnight() {
        let created: DateTime<Utc> = "2021-01-01T03:00:00Z".parse().unwrap();
        assert_eq!(format_created(&created), "2020-12-31 21:00:00");
    }

    #[test]
    fn test_status_accent_recognized() {
        assert_eq!(status_accent_class("Deployed"), "status-deployed");
        assert_eq!(status_accent_class("Staging"), "status-staging");
    }

    #[test]
    fn test_status_accent_defaults_to_unknown() {
        assert_eq!(status_accent_class("UNKNOWN"), "status-unknown");
        assert_eq!(status_accent_class("Terminating"), "status-unknown");
        assert_eq!(status_accent_class(""), "status-unknown");
    }

    #[test]
    fn test_trait_spacer_height_scales_per_trait() {
        assert_eq!(trait_spacer_height(0), "0px");
        assert_eq!(trait_spacer_height(1), "43px");
        assert_eq!(trait_spacer_height(4), "172px");
    }

    #[test]
    fn test_reserved_setting_is_suppressed() {
        let settings = vec![
            param("name", None, Some("application name")),
            param("image", None, Some("container image")),
            param("port", Some(json!(8080)), None),
        ];

        let visible = visible_settings(&settings);
        let names: Vec<&str> = visible.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["image", "port"]);
    }

    #[test]
    fn test_setting_value_prefers_default() {
        let setting = param("image", Some(json!("nginx:latest")), Some("container image"));
        assert_eq!(setting_display_value(&setting), "nginx:latest");
    }

    #[test]
    fn test_setting_value_falls_back_to_usage() {
        let setting = param("image", None, Some("container image"));
        assert_eq!(setting_display_value(&setting), "container image");

        let empty_default = param("image", Some(json!("")), Some("container image"));
        assert_eq!(setting_display_value(&empty_default), "container image");

        let null_default = param("image", Some(json!(null)), Some("container image"));
        assert_eq!(setting_display_value(&null_default), "container image");
    }

    #[test]
    fn test_setting_value_blank_when_both_absent() {
        let setting = param("image", None, None);
        assert_eq!(setting_display_value(&setting), "");
    }

    #[test]
    fn test_setting_value_displays_scalar_defaults() {
        assert_eq!(setting_display_value(&param("port", Some(json!(8080)), None)), "8080");
        assert_eq!(setting_display_value(&param("debug", Some(json!(false)), None)), "false");
    }
}
