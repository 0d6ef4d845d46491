// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! RS256 session token verification

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use prompt2pixel::auth::{AuthError, JwtSessionVerifier, SessionClaims, SessionVerifier};
use std::time::{SystemTime, UNIX_EPOCH};

use super::keys::{OTHER_PRIVATE_KEY_PEM, PRIVATE_KEY_PEM, PUBLIC_KEY_PEM};

const APP_ORIGIN: &str = "https://app.prompt2pixel.dev";

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

fn claims() -> SessionClaims {
    SessionClaims {
        sub: "user_2abc".to_string(),
        exp: now() + 600,
        nbf: Some(now() - 10),
        sid: Some("sess_42".to_string()),
        azp: Some(APP_ORIGIN.to_string()),
    }
}

fn sign_with(claims: &SessionClaims, private_pem: &str) -> String {
    let key = EncodingKey::from_rsa_pem(private_pem.as_bytes()).unwrap();
    encode(&Header::new(Algorithm::RS256), claims, &key).unwrap()
}

fn sign(claims: &SessionClaims) -> String {
    sign_with(claims, PRIVATE_KEY_PEM)
}

fn verifier(parties: &[&str]) -> JwtSessionVerifier {
    JwtSessionVerifier::from_rsa_pem(
        PUBLIC_KEY_PEM,
        parties.iter().map(|p| p.to_string()).collect(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_valid_token() {
    let session = verifier(&[]).verify(&sign(&claims())).await.unwrap();
    assert_eq!(session.user_id, "user_2abc");
    assert_eq!(session.session_id.as_deref(), Some("sess_42"));
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let mut expired = claims();
    expired.exp = now() - 3600;
    let err = verifier(&[]).verify(&sign(&expired)).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidToken(_)));
}

#[tokio::test]
async fn test_not_yet_valid_token_rejected() {
    let mut early = claims();
    early.nbf = Some(now() + 3600);
    let err = verifier(&[]).verify(&sign(&early)).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidToken(_)));
}

#[tokio::test]
async fn test_token_signed_by_other_key_rejected() {
    let forged = sign_with(&claims(), OTHER_PRIVATE_KEY_PEM);
    let err = verifier(&[]).verify(&forged).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidToken(_)));
}

#[tokio::test]
async fn test_hmac_token_rejected() {
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims(),
        &EncodingKey::from_secret(PUBLIC_KEY_PEM.as_bytes()),
    )
    .unwrap();
    let err = verifier(&[]).verify(&token).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidToken(_)));
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let err = verifier(&[]).verify("not.a.jwt").await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidToken(_)));
}

#[tokio::test]
async fn test_authorized_parties() {
    let token = sign(&claims());
    assert!(verifier(&[APP_ORIGIN]).verify(&token).await.is_ok());

    let err = verifier(&["https://other.example"])
        .verify(&token)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UnauthorizedParty(ref azp) if azp == APP_ORIGIN));

    let mut no_azp = claims();
    no_azp.azp = None;
    let err = verifier(&[APP_ORIGIN])
        .verify(&sign(&no_azp))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UnauthorizedParty(_)));
}

#[tokio::test]
async fn test_escaped_newlines_in_pem() {
    let escaped = PUBLIC_KEY_PEM.replace('\n', "\\n");
    let verifier = JwtSessionVerifier::from_rsa_pem(&escaped, Vec::new()).unwrap();
    assert!(verifier.verify(&sign(&claims())).await.is_ok());
}
