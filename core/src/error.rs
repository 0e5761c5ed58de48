// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evento_api::ApiError;

use crate::form::ValidationError;

/// Errors raised by the Evento screens.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Form input was rejected before anything was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The marketplace API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The session may not act on the requested resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The message to show the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
            e => e.to_string(),
        }
    }
}
