//! Chart configuration model and validation.
//!
//! A [`ChartConfig`] is the complete description of a chart: a title, a
//! number of period columns ("weeks"), ordered swimlanes of tasks, and an
//! optional palette mapping symbolic color keys to concrete values.
//!
//! Configurations arrive from loosely-typed JSON documents, so parsing is a
//! two-step boundary: [`ChartConfig::from_value`] shape-checks the required
//! fields (title, weeks, swimlanes) with a descriptive [`ConfigError`] and
//! extracts everything else leniently, defaulting malformed or missing
//! sub-fields instead of failing. Already-structured values are re-checked
//! with [`ChartConfig::validate`] at chart construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Default prefix for period-column headers ("W1", "W2", ...)
pub const DEFAULT_WEEK_LABEL: &str = "W";

/// Configuration validation error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config must have a title")]
    MissingTitle,

    #[error("Config must specify number of weeks (>= 1)")]
    InvalidWeeks,

    #[error("Config must have swimlanes array")]
    MissingSwimlanes,

    #[error("Config must be a JSON object")]
    NotAnObject,

    #[error("Config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// ChartConfig
// ============================================================================

/// A complete chart description
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Chart title, rendered above the grid
    pub title: String,
    /// Number of period columns
    pub weeks: u32,
    /// Prefix for period-column headers
    #[serde(default = "default_week_label")]
    pub week_label: String,
    /// Ordered swimlanes
    pub swimlanes: Vec<Swimlane>,
    /// Palette resolving symbolic task colors to concrete values
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

fn default_week_label() -> String {
    DEFAULT_WEEK_LABEL.into()
}

impl ChartConfig {
    /// Create a new configuration with the given title and week count
    pub fn new(title: impl Into<String>, weeks: u32) -> Self {
        Self {
            title: title.into(),
            weeks,
            week_label: default_week_label(),
            swimlanes: Vec::new(),
            colors: HashMap::new(),
        }
    }

    /// Set the period-column header prefix
    pub fn week_label(mut self, label: impl Into<String>) -> Self {
        self.week_label = label.into();
        self
    }

    /// Append a swimlane
    pub fn swimlane(mut self, lane: Swimlane) -> Self {
        self.swimlanes.push(lane);
        self
    }

    /// Add a palette entry
    pub fn color(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(key.into(), value.into());
        self
    }

    /// Resolve a symbolic color key through the palette
    pub fn resolve_color(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    /// Check the minimum shape needed to render.
    ///
    /// Only the three required fields are checked; malformed swimlane and
    /// task sub-fields are tolerated and handled defensively at render time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::MissingTitle);
        }
        if self.weeks < 1 {
            return Err(ConfigError::InvalidWeeks);
        }
        Ok(())
    }

    /// Parse a configuration from a JSON document
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(&value)
    }

    /// Build a configuration from a parsed JSON value.
    ///
    /// Fails when `title` is missing or empty, `weeks` is missing or below
    /// one, or `swimlanes` is missing or not an array. Everything else is
    /// extracted leniently.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let obj = value.as_object().ok_or(ConfigError::NotAnObject)?;

        let title = obj.get("title").and_then(Value::as_str).unwrap_or("");
        if title.is_empty() {
            return Err(ConfigError::MissingTitle);
        }

        let weeks = obj
            .get("weeks")
            .and_then(Value::as_i64)
            .filter(|w| *w >= 1)
            .and_then(|w| u32::try_from(w).ok())
            .ok_or(ConfigError::InvalidWeeks)?;

        let lanes = obj
            .get("swimlanes")
            .and_then(Value::as_array)
            .ok_or(ConfigError::MissingSwimlanes)?;

        let week_label = obj
            .get("weekLabel")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_WEEK_LABEL)
            .to_string();

        let colors = obj
            .get("colors")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(key, value)| {
                        value.as_str().map(|v| (key.clone(), v.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            title: title.to_string(),
            weeks,
            week_label,
            swimlanes: lanes.iter().map(Swimlane::from_value).collect(),
            colors,
        })
    }
}

// ============================================================================
// Swimlane
// ============================================================================

/// A named grouping of tasks, rendered as its own header row followed by
/// one row per task
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Swimlane {
    #[serde(default)]
    pub name: String,
    /// Tasks in render order; absent or malformed input means no tasks
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

impl Swimlane {
    /// Create a new swimlane with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Append a task
    pub fn task(mut self, task: TaskSpec) -> Self {
        self.tasks.push(task);
        self
    }

    /// Lenient extraction: a non-object entry becomes an empty swimlane,
    /// a non-array `tasks` field becomes no tasks.
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            tasks: value
                .get("tasks")
                .and_then(Value::as_array)
                .map(|tasks| tasks.iter().map(TaskSpec::from_value).collect())
                .unwrap_or_default(),
        }
    }
}

// ============================================================================
// TaskSpec
// ============================================================================

/// A schedulable unit occupying a column span within its swimlane
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    /// Row label, and in-bar label when `show_label` is set
    #[serde(default)]
    pub name: String,
    /// First period column the bar occupies (1-based)
    #[serde(default)]
    pub start: Option<i64>,
    /// Period column the bar stops before (exclusive)
    #[serde(default)]
    pub end: Option<i64>,
    /// Symbolic color key, resolved through the chart palette
    #[serde(default)]
    pub color: Option<String>,
    /// Render the task name inside the bar
    #[serde(default)]
    pub show_label: bool,
}

impl TaskSpec {
    /// Create a new task with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the column span (`start` inclusive, `end` exclusive)
    pub fn span(mut self, start: i64, end: i64) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Set the symbolic color key
    pub fn color(mut self, key: impl Into<String>) -> Self {
        self.color = Some(key.into());
        self
    }

    /// Render the task name inside the bar
    pub fn show_label(mut self) -> Self {
        self.show_label = true;
        self
    }

    /// A bar is drawn only when both span endpoints are present
    pub fn has_span(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Lenient extraction with defensive defaulting for every field
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            start: value.get("start").and_then(Value::as_i64),
            end: value.get("end").and_then(Value::as_i64),
            color: value
                .get("color")
                .and_then(Value::as_str)
                .map(String::from),
            show_label: value
                .get("showLabel")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_builder() {
        let config = ChartConfig::new("Plan", 4)
            .week_label("Sprint ")
            .swimlane(Swimlane::new("A").task(TaskSpec::new("T1").span(1, 3)))
            .color("blue", "#00f");

        assert_eq!(config.title, "Plan");
        assert_eq!(config.weeks, 4);
        assert_eq!(config.week_label, "Sprint ");
        assert_eq!(config.swimlanes.len(), 1);
        assert_eq!(config.swimlanes[0].tasks.len(), 1);
        assert_eq!(config.resolve_color("blue"), Some("#00f"));
        assert_eq!(config.resolve_color("purple"), None);
    }

    #[test]
    fn validate_rejects_empty_title() {
        let config = ChartConfig::new("", 4);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingTitle)
        ));
    }

    #[test]
    fn validate_rejects_zero_weeks() {
        let config = ChartConfig::new("Plan", 0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeeks)
        ));
    }

    #[test]
    fn from_json_valid_config() {
        let config = ChartConfig::from_json(
            r##"{
                "title": "Plan",
                "weeks": 4,
                "swimlanes": [
                    {"name": "A", "tasks": [
                        {"name": "T1", "start": 1, "end": 3, "color": "blue"}
                    ]}
                ],
                "colors": {"blue": "#00f"}
            }"##,
        )
        .unwrap();

        assert_eq!(config.title, "Plan");
        assert_eq!(config.weeks, 4);
        assert_eq!(config.week_label, "W");
        assert_eq!(config.swimlanes[0].name, "A");
        let task = &config.swimlanes[0].tasks[0];
        assert_eq!(task.start, Some(1));
        assert_eq!(task.end, Some(3));
        assert_eq!(task.color.as_deref(), Some("blue"));
        assert!(!task.show_label);
        assert_eq!(config.resolve_color("blue"), Some("#00f"));
    }

    #[test]
    fn from_json_missing_title_fails() {
        let result = ChartConfig::from_json(r#"{"weeks": 4, "swimlanes": []}"#);
        assert!(matches!(result, Err(ConfigError::MissingTitle)));
    }

    #[test]
    fn from_json_empty_title_fails() {
        let result =
            ChartConfig::from_json(r#"{"title": "", "weeks": 4, "swimlanes": []}"#);
        assert!(matches!(result, Err(ConfigError::MissingTitle)));
    }

    #[test]
    fn from_json_zero_weeks_fails() {
        let result =
            ChartConfig::from_json(r#"{"title": "Plan", "weeks": 0, "swimlanes": []}"#);
        assert!(matches!(result, Err(ConfigError::InvalidWeeks)));
    }

    #[test]
    fn from_json_negative_weeks_fails() {
        let result =
            ChartConfig::from_json(r#"{"title": "Plan", "weeks": -3, "swimlanes": []}"#);
        assert!(matches!(result, Err(ConfigError::InvalidWeeks)));
    }

    #[test]
    fn from_json_missing_swimlanes_fails() {
        let result = ChartConfig::from_json(r#"{"title": "Plan", "weeks": 4}"#);
        assert!(matches!(result, Err(ConfigError::MissingSwimlanes)));
    }

    #[test]
    fn from_json_non_array_swimlanes_fails() {
        let result = ChartConfig::from_json(
            r#"{"title": "Plan", "weeks": 4, "swimlanes": "nope"}"#,
        );
        assert!(matches!(result, Err(ConfigError::MissingSwimlanes)));
    }

    #[test]
    fn from_json_rejects_non_object_root() {
        let result = ChartConfig::from_json(r#"[1, 2, 3]"#);
        assert!(matches!(result, Err(ConfigError::NotAnObject)));
    }

    #[test]
    fn from_json_rejects_invalid_json() {
        let result = ChartConfig::from_json("{not json");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn from_json_custom_week_label() {
        let config = ChartConfig::from_json(
            r#"{"title": "Plan", "weeks": 2, "weekLabel": "Sprint ", "swimlanes": []}"#,
        )
        .unwrap();
        assert_eq!(config.week_label, "Sprint ");
    }

    #[test]
    fn lenient_swimlane_without_tasks() {
        let config = ChartConfig::from_json(
            r#"{"title": "Plan", "weeks": 4, "swimlanes": [{"name": "A"}]}"#,
        )
        .unwrap();
        assert_eq!(config.swimlanes[0].name, "A");
        assert!(config.swimlanes[0].tasks.is_empty());
    }

    #[test]
    fn lenient_non_array_tasks_treated_as_empty() {
        let config = ChartConfig::from_json(
            r#"{"title": "Plan", "weeks": 4, "swimlanes": [{"name": "A", "tasks": 7}]}"#,
        )
        .unwrap();
        assert!(config.swimlanes[0].tasks.is_empty());
    }

    #[test]
    fn lenient_non_object_swimlane_entry() {
        let config = ChartConfig::from_json(
            r#"{"title": "Plan", "weeks": 4, "swimlanes": ["oops"]}"#,
        )
        .unwrap();
        assert_eq!(config.swimlanes.len(), 1);
        assert_eq!(config.swimlanes[0].name, "");
        assert!(config.swimlanes[0].tasks.is_empty());
    }

    #[test]
    fn lenient_task_without_span() {
        let config = ChartConfig::from_json(
            r#"{"title": "Plan", "weeks": 4, "swimlanes": [
                {"name": "A", "tasks": [{"name": "T1", "start": 2}]}
            ]}"#,
        )
        .unwrap();
        let task = &config.swimlanes[0].tasks[0];
        assert_eq!(task.start, Some(2));
        assert_eq!(task.end, None);
        assert!(!task.has_span());
    }

    #[test]
    fn lenient_non_string_color_values_skipped() {
        let config = ChartConfig::from_json(
            r##"{"title": "Plan", "weeks": 4, "swimlanes": [],
                "colors": {"blue": "#00f", "broken": 7}}"##,
        )
        .unwrap();
        assert_eq!(config.resolve_color("blue"), Some("#00f"));
        assert_eq!(config.resolve_color("broken"), None);
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            format!("{}", ConfigError::MissingTitle),
            "Config must have a title"
        );
        assert_eq!(
            format!("{}", ConfigError::InvalidWeeks),
            "Config must specify number of weeks (>= 1)"
        );
        assert_eq!(
            format!("{}", ConfigError::MissingSwimlanes),
            "Config must have swimlanes array"
        );
    }
}
