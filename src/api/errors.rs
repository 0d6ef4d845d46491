// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::providers::ProviderError;
use crate::thumbnail::ReferenceImageError;

/// JSON error body returned by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    InvalidRequest(String),
    /// Malformed or undecodable JSON body
    InvalidBody(String),
    Unauthorized,
    /// Body over the configured size cap
    PayloadTooLarge,
    Upstream {
        message: String,
        details: Option<String>,
    },
    NoImageGenerated,
    InternalError(String),
}

impl ApiError {
    /// Generic thumbnail pipeline failure with the underlying cause as detail
    pub fn generation_failed(details: impl ToString) -> Self {
        ApiError::Upstream {
            message: "Failed to generate thumbnail".to_string(),
            details: Some(details.to_string()),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let (error, details) = match self {
            ApiError::InvalidRequest(msg) => (msg.clone(), None),
            ApiError::InvalidBody(detail) => {
                ("Invalid request body".to_string(), Some(detail.clone()))
            }
            ApiError::Unauthorized => ("Unauthorized".to_string(), None),
            ApiError::PayloadTooLarge => ("Request body too large".to_string(), None),
            ApiError::Upstream { message, details } => (message.clone(), details.clone()),
            ApiError::NoImageGenerated => ("No image generated".to_string(), None),
            ApiError::InternalError(msg) => (msg.clone(), None),
        };

        ErrorResponse { error, details }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) | ApiError::InvalidBody(_) => 400,
            ApiError::Unauthorized => 401,
            ApiError::PayloadTooLarge => 413,
            ApiError::Upstream { .. } | ApiError::NoImageGenerated | ApiError::InternalError(_) => {
                500
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::InvalidBody(detail) => write!(f, "Invalid request body: {}", detail),
            ApiError::Unauthorized => write!(f, "Unauthorized"),
            ApiError::PayloadTooLarge => write!(f, "Request body too large"),
            ApiError::Upstream { message, details } => match details {
                Some(details) => write!(f, "{}: {}", message, details),
                None => write!(f, "{}", message),
            },
            ApiError::NoImageGenerated => write!(f, "No image generated"),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NoImageGenerated => ApiError::NoImageGenerated,
            other => ApiError::generation_failed(other),
        }
    }
}

impl From<ReferenceImageError> for ApiError {
    fn from(err: ReferenceImageError) -> Self {
        if err.is_invalid_input() {
            ApiError::InvalidRequest(err.to_string())
        } else {
            ApiError::generation_failed(err)
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge;
        }
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_response())).into_response()
    }
}
