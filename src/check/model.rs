use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::CheckError;

/// One diagnostic assertion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckResult {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Err", default, deserialize_with = "truthy")]
    pub is_error: bool,
    #[serde(rename = "ErrMsg", default)]
    pub error_message: Option<String>,
    #[serde(rename = "HintURL", default)]
    pub hint_url: Option<String>,
    #[serde(rename = "Warning", default, deserialize_with = "truthy")]
    pub is_warning: bool,
}

impl CheckResult {
    pub fn category(&self) -> ResultCategory {
        ResultCategory::classify(self.is_error, self.is_warning)
    }
}

/// Visual category of a single result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCategory {
    Success,
    Warning,
    Error,
}

impl ResultCategory {
    /// A warning is a soft failure: it only applies when the error flag is set.
    pub fn classify(is_error: bool, is_warning: bool) -> Self {
        match (is_error, is_warning) {
            (false, _) => ResultCategory::Success,
            (true, false) => ResultCategory::Error,
            (true, true) => ResultCategory::Warning,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ResultCategory::Success => "\u{2713}",
            ResultCategory::Error => "\u{2717}",
            ResultCategory::Warning => "!",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            ResultCategory::Success => "result-icon icon-success",
            ResultCategory::Error => "result-icon icon-error",
            ResultCategory::Warning => "result-icon icon-warning",
        }
    }

    pub fn is_failure(self) -> bool {
        self != ResultCategory::Success
    }
}

/// Results sharing a title, in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckGroup {
    pub title: String,
    pub results: Vec<CheckResult>,
}

/// Complete response of one check invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckOutcome {
    #[serde(rename = "success")]
    pub overall_success: bool,
    #[serde(rename = "results", default, deserialize_with = "ordered_groups")]
    pub groups: Vec<CheckGroup>,
}

impl CheckOutcome {
    /// Boundary parse of the collaborator's resolved value.
    pub fn from_value(value: Value) -> Result<Self, CheckError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn result_count(&self) -> usize {
        self.groups.iter().map(|g| g.results.len()).sum()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

// Relies on serde_json's `preserve_order` so the map iterates in payload order.
fn ordered_groups<'de, D>(deserializer: D) -> Result<Vec<CheckGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Map<String, Value>>::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(|(title, results)| {
            let results: Vec<CheckResult> = serde_json::from_value(results)
                .map_err(|e| {
                    <D::Error as serde::de::Error>::custom(format!("group '{}': {}", title, e))
                })?;
            Ok(CheckGroup { title, results })
        })
        .collect()
}
