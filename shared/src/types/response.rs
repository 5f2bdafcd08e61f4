//! API response envelope

use serde::{Deserialize, Serialize};

/// Envelope wrapping every JSON body the API returns
///
/// Successful responses carry `error: false` and an optional payload,
/// failures carry `error: true` and a message describing the problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonResponse<T = serde_json::Value> {
    /// Whether the response describes a failure
    pub error: bool,

    /// Human-readable message
    pub message: String,

    /// Response payload (omitted when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> JsonResponse<T> {
    /// Create a successful response carrying a payload
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            error: false,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_envelope_omits_data() {
        let response: JsonResponse = JsonResponse::error("invalid credentials");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({ "error": true, "message": "invalid credentials" }));
    }

    #[test]
    fn test_success_envelope_carries_data() {
        let response = JsonResponse::success("ok", json!({ "id": 1 }));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["error"], false);
        assert_eq!(value["message"], "ok");
        assert_eq!(value["data"]["id"], 1);
    }
}
