// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Session verification against the external identity provider
//!
//! Sessions are issued elsewhere; this module only verifies the RS256 session
//! JWT the browser presents, using the provider's PEM public key.

use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Cookie the identity provider uses for same-origin session tokens
pub const SESSION_COOKIE: &str = "__session";

const CLOCK_LEEWAY_SECS: u64 = 5;

/// Verified session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// External identity id of the signed-in user
    pub user_id: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Authorized party (origin that requested the token)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azp: Option<String>,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    #[error("Token issued for unauthorized party: {0}")]
    UnauthorizedParty(String),

    #[error("Invalid verification key: {0}")]
    InvalidKey(String),
}

/// Verifies a session token and returns the session it belongs to
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Session, AuthError>;
}

/// Networkless RS256 verifier
pub struct JwtSessionVerifier {
    key: DecodingKey,
    validation: Validation,
    authorized_parties: Vec<String>,
}

impl JwtSessionVerifier {
    pub fn from_rsa_pem(pem: &str, authorized_parties: Vec<String>) -> Result<Self, AuthError> {
        // Keys pasted into env files often carry literal "\n" sequences
        let pem = pem.replace("\\n", "\n");
        let key = DecodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| AuthError::InvalidKey(e.to_string()))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = CLOCK_LEEWAY_SECS;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            key,
            validation,
            authorized_parties,
        })
    }
}

#[async_trait]
impl SessionVerifier for JwtSessionVerifier {
    async fn verify(&self, token: &str) -> Result<Session, AuthError> {
        let data = decode::<SessionClaims>(token, &self.key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        let claims = data.claims;

        if !self.authorized_parties.is_empty() {
            let azp = claims.azp.as_deref().unwrap_or_default();
            if !self.authorized_parties.iter().any(|party| party == azp) {
                return Err(AuthError::UnauthorizedParty(azp.to_string()));
            }
        }

        debug!("Session verified for user {}", claims.sub);
        Ok(Session {
            user_id: claims.sub,
            session_id: claims.sid,
        })
    }
}

/// Pull the session token from `Authorization: Bearer` or the session cookie
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
