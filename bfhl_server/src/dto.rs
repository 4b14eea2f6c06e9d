//! Request and response bodies for the HTTP API.

use bfhl_config::IdentityConfig;
use bfhl_core::ClassificationResult;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Successful `POST /bfhl` response: identity fields plus the flattened
/// classification result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

impl ClassifyResponse {
    #[must_use]
    pub fn new(identity: &IdentityConfig, result: ClassificationResult) -> Self {
        Self {
            is_success: true,
            user_id: identity.user_id.clone(),
            email: identity.email.clone(),
            roll_number: identity.roll_number.clone(),
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub is_success: bool,
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            is_success: false,
            error: error.into(),
        }
    }
}

/// `GET /` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
    pub endpoint: String,
    pub status: String,
}

impl Default for StatusResponse {
    fn default() -> Self {
        Self {
            message: "VIT Full Stack API is running!".to_string(),
            endpoint: "/bfhl (POST)".to_string(),
            status: "active".to_string(),
        }
    }
}

/// `GET /bfhl` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCodeResponse {
    pub operation_code: u8,
}

/// String form of one `data` element.
///
/// Strings pass through untouched. Numbers use plain positional decimal
/// (`5`, `2.5`, `1000`, `0.0000001`), booleans and null their JSON text,
/// arrays and objects their compact JSON.
#[must_use]
pub fn token_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_string(n),
        other => other.to_string(),
    }
}

/// serde_json writes floats in exponent form (`1e20`, `1e-7`) and keeps a
/// trailing `.0`; `f64`'s `Display` does neither.
fn number_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
}

/// Pull the `data` array out of a request body.
#[must_use]
pub fn data_tokens(body: &Value) -> Option<Vec<String>> {
    match body.get("data")? {
        Value::Array(items) => Some(items.iter().map(token_string).collect()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_stringify() {
        assert_eq!(token_string(&json!("a")), "a");
        assert_eq!(token_string(&json!(5)), "5");
        assert_eq!(token_string(&json!(-3)), "-3");
        assert_eq!(token_string(&json!(2.5)), "2.5");
        assert_eq!(token_string(&json!(5.0)), "5");
        assert_eq!(token_string(&json!(-0.25)), "-0.25");
        assert_eq!(token_string(&json!(true)), "true");
        assert_eq!(token_string(&json!(null)), "null");
    }

    #[test]
    fn floats_avoid_exponent_notation() -> Result<(), serde_json::Error> {
        let data: Value =
            serde_json::from_str("[1e3, 1e-7, 100000000000000000000, 18446744073709551615]")?;
        let tokens: Vec<String> = data
            .as_array()
            .map(|items| items.iter().map(token_string).collect())
            .unwrap_or_default();
        assert_eq!(
            tokens,
            ["1000", "0.0000001", "100000000000000000000", "18446744073709551615"]
        );
        Ok(())
    }

    #[test]
    fn containers_stringify_as_json() {
        assert_eq!(token_string(&json!([1, "a"])), r#"[1,"a"]"#);
        assert_eq!(token_string(&json!({"k": 1})), r#"{"k":1}"#);
    }

    #[test]
    fn data_must_be_an_array() {
        assert_eq!(
            data_tokens(&json!({"data": ["a", 1]})),
            Some(vec!["a".to_string(), "1".to_string()])
        );
        assert_eq!(data_tokens(&json!({"data": []})), Some(Vec::new()));
        assert_eq!(data_tokens(&json!({"data": "a,1"})), None);
        assert_eq!(data_tokens(&json!({"data": null})), None);
        assert_eq!(data_tokens(&json!({"invalid": "data"})), None);
        assert_eq!(data_tokens(&json!(["a", 1])), None);
    }

    #[test]
    fn success_envelope_is_flat() -> Result<(), serde_json::Error> {
        let response = ClassifyResponse::new(
            &IdentityConfig::default(),
            bfhl_core::classify(["a", "1"]),
        );
        let value = serde_json::to_value(&response)?;
        assert_eq!(value["is_success"], true);
        assert_eq!(value["user_id"], "john_doe_17091999");
        assert_eq!(value["odd_numbers"], json!(["1"]));
        assert_eq!(value["alphabets"], json!(["A"]));
        assert_eq!(value["concat_string"], "A");
        assert!(value.get("result").is_none());
        Ok(())
    }
}
