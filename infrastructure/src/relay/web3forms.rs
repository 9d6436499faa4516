//! Web3Forms relay.
//!
//! Each form family has its own access key. The key is added to the payload
//! as `access_key` and the whole payload is posted as JSON, once.

use agency_application::{FormRelay, RelayError, RelayReply};
use agency_domain::{FormPayload, FormType};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Payload key carrying the relay access key.
pub const ACCESS_KEY_FIELD: &str = "access_key";

/// [`FormRelay`] backed by the Web3Forms submit API.
pub struct Web3FormsRelay {
    client: reqwest::Client,
    endpoint: String,
    keys: HashMap<FormType, String>,
}

impl Web3FormsRelay {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            keys: HashMap::new(),
        }
    }

    /// Register the access key for one form family. Blank keys are ignored.
    pub fn with_key(mut self, form_type: FormType, key: Option<impl Into<String>>) -> Self {
        if let Some(key) = key.map(Into::into)
            && !key.trim().is_empty()
        {
            self.keys.insert(form_type, key);
        }
        self
    }
}

fn transport_error(e: reqwest::Error) -> RelayError {
    if e.is_timeout() {
        RelayError::Timeout
    } else {
        RelayError::ConnectionError(e.to_string())
    }
}

#[async_trait]
impl FormRelay for Web3FormsRelay {
    fn is_configured(&self, form_type: FormType) -> bool {
        self.keys.contains_key(&form_type)
    }

    async fn submit(
        &self,
        form_type: FormType,
        payload: &FormPayload,
    ) -> Result<RelayReply, RelayError> {
        let Some(key) = self.keys.get(&form_type) else {
            return Err(RelayError::MissingKey(form_type));
        };

        let body = payload.clone().with(ACCESS_KEY_FIELD, key.as_str());
        debug!("Relaying {} form with {} fields", form_type, body.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(transport_error)?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        if !(200..300).contains(&status) {
            warn!("Relay answered {} for {} form", status, form_type);
        }
        Ok(RelayReply::new(status, body))
    }
}
