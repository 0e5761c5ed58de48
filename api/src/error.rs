// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Message shown when the server fails without saying why.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Marketplace API client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not have the expected shape.
    #[error("Invalid server response: {0}")]
    Decode(String),

    /// The server answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, or a generic one.
        message: String,
    },

    /// Credentials were rejected.
    #[error("Invalid credentials")]
    Unauthorized,

    /// Resource not found.
    #[error("Resource not found: {path}")]
    NotFound {
        /// Request path.
        path: String,
        /// Server-provided message, if any.
        message: Option<String>,
    },

    /// Local I/O failed, e.g. reading a file to upload.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// A not-found error without a server message.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound {
            path: path.into(),
            message: None,
        }
    }

    /// The message to surface to the user: the server's when it sent one.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. }
            | Self::NotFound {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Network(_) => {
                "Unable to reach the server. Please check your network connection and try again."
                    .to_string()
            }
            e => e.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
