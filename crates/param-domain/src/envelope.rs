//! Envelope de respuesta: uno por petición, terminal e inmutable.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STATUS_OK: u16 = 200;
pub const STATUS_ERROR: u16 = 500;

/// `{jobRunID, data, result, statusCode: 200}` o
/// `{jobRunID, data, error, statusCode: 500}`; nunca ambos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "jobRunID")]
    job_run_id: String,
    data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(rename = "statusCode")]
    status_code: u16,
}

impl ResponseEnvelope {
    /// Envelope de éxito. Si `data` es un objeto se le añade `result`.
    pub fn success(job_run_id: impl Into<String>, mut data: Value, result: Value) -> Self {
        if let Value::Object(map) = &mut data {
            map.insert("result".to_string(), result.clone());
        }
        Self { job_run_id: job_run_id.into(),
               data,
               result: Some(result),
               error: None,
               status_code: STATUS_OK }
    }

    pub fn failure(job_run_id: impl Into<String>, data: Value, error: impl Display) -> Self {
        Self { job_run_id: job_run_id.into(),
               data,
               result: None,
               error: Some(format!("There was an error: {error}")),
               status_code: STATUS_ERROR }
    }

    pub fn job_run_id(&self) -> &str {
        &self.job_run_id
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_appends_result_to_data() {
        let env = ResponseEnvelope::success("9", json!({"program": "p"}), json!(12.5));
        assert_eq!(env.data()["result"], json!(12.5));
        let wire = serde_json::to_value(&env).unwrap();
        assert_eq!(wire, json!({"jobRunID": "9", "data": {"program": "p", "result": 12.5}, "result": 12.5, "statusCode": 200}));
    }

    #[test]
    fn failure_has_no_result() {
        let env = ResponseEnvelope::failure("1", Value::Null, "boom");
        let wire = serde_json::to_value(&env).unwrap();
        assert_eq!(wire, json!({"jobRunID": "1", "data": null, "error": "There was an error: boom", "statusCode": 500}));
        assert!(!env.is_success());
    }
}
