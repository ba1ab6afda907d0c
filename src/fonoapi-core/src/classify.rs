//! Response classification
//!
//! The Fono API answers HTTP 200 for most logical failures and signals them
//! through a `{status, message}` object instead. Empty results arrive either as
//! such an object or as the degenerate `[[]]` array. [`classify`] turns every
//! (status, body) pair into exactly one [`ClassifiedResponse`] so callers
//! never match on message strings themselves.

use serde_json::Value;

use crate::models::{AttributeMap, ErrorBody};

/// Message sent with HTTP 200 when the token is unknown or blocked.
pub const INVALID_TOKEN_MESSAGE: &str =
    "Invalid or Blocked Token. Generate a Token at fonoapi.freshpixl.com";

/// Message sent with HTTP 200 when nothing matched the query.
pub const NO_RESULTS_MESSAGE: &str = "No Matching Results Found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedResponse {
    Success(Vec<AttributeMap>),
    Empty,
    InvalidToken,
    ServerError {
        status: u16,
        error: String,
        message: String,
    },
    /// Body is neither an error object nor an array of device objects.
    MalformedBody(String),
}

impl ClassifiedResponse {
    fn server_error(status: u16, body: &Value) -> Self {
        let ErrorBody { status: error, message } = ErrorBody::from_value(body);
        ClassifiedResponse::ServerError {
            status,
            error,
            message,
        }
    }
}

/// Classify a decoded response. Pure; the same input always yields the same variant.
pub fn classify(status: u16, body: &Value) -> ClassifiedResponse {
    let classified = match body {
        _ if status != 200 => ClassifiedResponse::server_error(status, body),
        Value::Object(object) => match object.get("message").and_then(Value::as_str) {
            Some(INVALID_TOKEN_MESSAGE) => ClassifiedResponse::InvalidToken,
            Some(NO_RESULTS_MESSAGE) => ClassifiedResponse::Empty,
            _ => ClassifiedResponse::server_error(status, body),
        },
        Value::Array(items) => classify_rows(items),
        other => ClassifiedResponse::MalformedBody(format!(
            "expected a JSON object or array, got {}",
            json_kind(other)
        )),
    };

    tracing::debug!(status, outcome = outcome_name(&classified), "Classified response");
    classified
}

fn classify_rows(items: &[Value]) -> ClassifiedResponse {
    if items.is_empty() || matches!(items, [Value::Array(inner)] if inner.is_empty()) {
        return ClassifiedResponse::Empty;
    }

    let mut rows = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::Object(object) => rows.push(AttributeMap::from_json(object.clone())),
            other => {
                return ClassifiedResponse::MalformedBody(format!(
                    "row {} is {}, expected an object",
                    i,
                    json_kind(other)
                ))
            }
        }
    }

    ClassifiedResponse::Success(rows)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn outcome_name(classified: &ClassifiedResponse) -> &'static str {
    match classified {
        ClassifiedResponse::Success(_) => "success",
        ClassifiedResponse::Empty => "empty",
        ClassifiedResponse::InvalidToken => "invalid_token",
        ClassifiedResponse::ServerError { .. } => "server_error",
        ClassifiedResponse::MalformedBody(_) => "malformed_body",
    }
}
