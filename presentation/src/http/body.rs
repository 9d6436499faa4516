//! Request body decoding.
//!
//! The endpoint accepts a JSON object or a urlencoded form. Repeated form
//! keys (and keys ending in `[]`) become arrays.

use agency_domain::FormPayload;
use axum::http::{HeaderMap, StatusCode, header::CONTENT_TYPE};
use serde_json::{Map, Value};
use thiserror::Error;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const JSON: &str = "application/json";

/// Why a request body could not be turned into a [`FormPayload`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BodyError {
    #[error("Unsupported content type: {0}")]
    UnsupportedMediaType(String),

    #[error("Invalid request body: {0}")]
    Malformed(String),

    #[error("Request body must be an object of form fields")]
    NotAnObject,
}

impl BodyError {
    pub fn status(&self) -> StatusCode {
        match self {
            BodyError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            BodyError::Malformed(_) | BodyError::NotAnObject => StatusCode::BAD_REQUEST,
        }
    }
}

fn media_type(headers: &HeaderMap) -> String {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

pub fn decode_payload(headers: &HeaderMap, body: &[u8]) -> Result<FormPayload, BodyError> {
    match media_type(headers).as_str() {
        FORM_URLENCODED => Ok(decode_form(body)),
        JSON | "" => decode_json(body),
        other => Err(BodyError::UnsupportedMediaType(other.to_string())),
    }
}

fn decode_json(body: &[u8]) -> Result<FormPayload, BodyError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| BodyError::Malformed(e.to_string()))?;
    FormPayload::from_value(value).ok_or(BodyError::NotAnObject)
}

fn decode_form(body: &[u8]) -> FormPayload {
    let mut map = Map::new();
    for (key, value) in url::form_urlencoded::parse(body) {
        let (key, forced_array) = match key.strip_suffix("[]") {
            Some(stripped) => (stripped.to_string(), true),
            None => (key.into_owned(), false),
        };
        let value = Value::String(value.into_owned());

        match map.get_mut(&key) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None if forced_array => {
                map.insert(key, Value::Array(vec![value]));
            }
            None => {
                map.insert(key, value);
            }
        }
    }
    FormPayload::from(map)
}
