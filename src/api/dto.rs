// ==========================================
// Asin Batcher - transport DTOs
// ==========================================
// One JSON request in, one JSON response out. Field parsing is
// deliberately lenient: the historical client sends loosely typed
// values and the engine coerces instead of rejecting.
// ==========================================

use crate::domain::{Market, OrderPolicy, DEFAULT_BATCHES};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ==========================================
// Request
// ==========================================
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub input_path: Option<String>,
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    /// Accepts a number or a numeric string; anything else falls back
    /// to the default.
    #[serde(default)]
    pub batches: Option<serde_json::Value>,
    #[serde(default)]
    pub store: Option<String>,
    #[serde(default)]
    pub file_label: Option<String>,
    #[serde(default)]
    pub name_prefix_1: Option<String>,
    #[serde(default)]
    pub name_prefix_2: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    /// Truthiness-coerced: numbers, strings and null are accepted, not
    /// just booleans.
    #[serde(default)]
    pub zip_output: Option<serde_json::Value>,
}

impl EngineRequest {
    pub fn market(&self) -> Market {
        Market::from_request(self.market.as_deref())
    }

    pub fn order(&self) -> OrderPolicy {
        OrderPolicy::from_request(self.order.as_deref())
    }

    /// Requested batch count; garbage and values below 1 fall back to
    /// the default (30).
    pub fn batch_count(&self) -> usize {
        let parsed = match &self.batches {
            Some(serde_json::Value::Number(n)) => n.as_u64().map(|v| v as usize),
            Some(serde_json::Value::String(s)) => s.trim().parse::<usize>().ok(),
            _ => None,
        };
        match parsed {
            Some(n) if n >= 1 => n,
            _ => DEFAULT_BATCHES,
        }
    }

    /// Whether to zip the output, with historical truthiness rules:
    /// null, false, 0 and the empty string mean no; any other number
    /// or non-empty string means yes.
    pub fn zip_output(&self) -> bool {
        match &self.zip_output {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::Number(n)) => n.as_f64() != Some(0.0),
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(serde_json::Value::Array(a)) => !a.is_empty(),
            Some(serde_json::Value::Object(o)) => !o.is_empty(),
        }
    }

    /// Output directory, defaulting to the user Downloads folder.
    pub fn output_dir(&self) -> PathBuf {
        match self.output_dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::download_dir().unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("Downloads")
            }),
        }
    }

    fn trimmed(field: &Option<String>) -> &str {
        field.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn input_path(&self) -> &str {
        Self::trimmed(&self.input_path)
    }

    pub fn action(&self) -> String {
        Self::trimmed(&self.action).to_lowercase()
    }

    pub fn store(&self) -> &str {
        Self::trimmed(&self.store)
    }

    pub fn file_label(&self) -> &str {
        Self::trimmed(&self.file_label)
    }

    pub fn name_prefix_1(&self) -> &str {
        Self::trimmed(&self.name_prefix_1)
    }

    pub fn name_prefix_2(&self) -> &str {
        Self::trimmed(&self.name_prefix_2)
    }

    pub fn store_name(&self) -> &str {
        Self::trimmed(&self.store_name)
    }
}

// ==========================================
// Responses
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct FailureResponse {
    pub ok: bool,
    pub error: String,
    pub traceback: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewResponse {
    pub ok: bool,
    pub total: usize,
    pub unique: usize,
    pub duplicates: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub ok: bool,
    pub total: usize,
    pub unique: usize,
    pub duplicates: usize,
    /// Empty when the output was zipped.
    pub output_folder: String,
    /// Empty when no archive was requested.
    pub zip_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DuplicatesResponse {
    pub ok: bool,
    pub duplicates: usize,
    pub csv_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_count_coercion() {
        let mut req = EngineRequest::default();
        assert_eq!(req.batch_count(), DEFAULT_BATCHES);

        req.batches = Some(serde_json::json!(7));
        assert_eq!(req.batch_count(), 7);

        req.batches = Some(serde_json::json!("12"));
        assert_eq!(req.batch_count(), 12);

        req.batches = Some(serde_json::json!("garbage"));
        assert_eq!(req.batch_count(), DEFAULT_BATCHES);

        req.batches = Some(serde_json::json!(0));
        assert_eq!(req.batch_count(), DEFAULT_BATCHES);

        req.batches = Some(serde_json::json!(-3));
        assert_eq!(req.batch_count(), DEFAULT_BATCHES);
    }

    #[test]
    fn test_request_defaults() {
        let req: EngineRequest = serde_json::from_str(r#"{"action":"preview"}"#).unwrap();
        assert_eq!(req.action(), "preview");
        assert_eq!(req.market(), crate::domain::Market::Us);
        assert_eq!(req.order(), crate::domain::OrderPolicy::Ascending);
        assert!(!req.zip_output());
    }

    #[test]
    fn test_zip_output_truthiness() {
        let parse = |raw: &str| -> EngineRequest { serde_json::from_str(raw).unwrap() };

        assert!(parse(r#"{"zip_output": true}"#).zip_output());
        assert!(parse(r#"{"zip_output": 1}"#).zip_output());
        assert!(parse(r#"{"zip_output": "1"}"#).zip_output());
        // Historical rule: any non-empty string counts, even "0".
        assert!(parse(r#"{"zip_output": "0"}"#).zip_output());

        assert!(!parse(r#"{"zip_output": false}"#).zip_output());
        assert!(!parse(r#"{"zip_output": null}"#).zip_output());
        assert!(!parse(r#"{"zip_output": 0}"#).zip_output());
        assert!(!parse(r#"{"zip_output": ""}"#).zip_output());
        assert!(!parse(r#"{}"#).zip_output());
    }

    #[test]
    fn test_explicit_output_dir_wins() {
        let req: EngineRequest =
            serde_json::from_str(r#"{"output_dir":"  /tmp/salida  "}"#).unwrap();
        assert_eq!(req.output_dir(), PathBuf::from("/tmp/salida"));
    }
}
