// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Session extractor for authenticated routes

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::{debug, warn};

use super::errors::ApiError;
use super::http_server::AppState;
use crate::auth::{extract_session_token, Session};

/// Verified session of the caller. Rejects with 401 before the body is read.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_session_token(&parts.headers).ok_or_else(|| {
            debug!("Rejecting {}: no session token", parts.uri.path());
            ApiError::Unauthorized
        })?;

        let session = state.session_verifier.verify(&token).await.map_err(|e| {
            warn!("Session verification failed: {}", e);
            ApiError::Unauthorized
        })?;

        Ok(AuthenticatedUser(session))
    }
}
