// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with status mapping and JSON decoding.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, GENERIC_FAILURE};
use crate::types::Message;

/// HTTP client for marketplace API operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if config.base_url.trim().is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a request for an endpoint path.
    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.config.url(path))
    }

    /// Executes a request and maps error statuses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND => {
                let path = resp.url().path().to_string();
                let text = resp.text().await.unwrap_or_default();
                Err(ApiError::NotFound {
                    path,
                    message: server_message(&text),
                })
            }
            status => {
                let text = resp.text().await.unwrap_or_default();
                Err(ApiError::Status {
                    status: status.as_u16(),
                    message: server_message(&text).unwrap_or_else(|| GENERIC_FAILURE.to_string()),
                })
            }
        }
    }

    /// Decodes a JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read or does not match `T`.
    pub async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Reads an acknowledgment body, tolerating empty and non-JSON replies.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read.
    pub async fn message(resp: Response) -> Result<Message, ApiError> {
        let text = resp.text().await?;
        if text.trim().is_empty() {
            return Ok(Message::default());
        }

        Ok(serde_json::from_str(&text).unwrap_or_else(|_| Message {
            message: Some(text),
            id: None,
        }))
    }
}

/// Extracts `message` (or `error`) from a JSON error body.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .filter(|s| !s.trim().is_empty())
        .map(ToString::to_string)
}
