use axum::{RequestPartsExt, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use base64::{Engine, engine::general_purpose};
use serde::Deserialize;
use uuid::Uuid;

use super::http::server::api_entities::api_error::ApiError;

#[derive(Debug, Deserialize)]
struct TokenClaims {
    sub: String,
}

/// Identity of the authenticated caller, taken from the `sub` claim of the
/// bearer token. Signature verification happens at the gateway; this service
/// only reads the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token_from_bearer(parts).await?;

        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(ApiError::Unauthorized("Invalid token".to_string()));
        }

        let decoded = general_purpose::URL_SAFE_NO_PAD
            .decode(segments[1])
            .map_err(|e| {
                tracing::error!("Failed to decode token payload: {:?}", e);
                ApiError::Unauthorized("Invalid token".to_string())
            })?;

        let claims: TokenClaims = serde_json::from_slice(&decoded).map_err(|e| {
            tracing::error!("Failed to deserialize token claims: {:?}", e);
            ApiError::Unauthorized("Invalid token".to_string())
        })?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(AuthUser(user_id))
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("Token not found".to_string()))?;

    Ok(bearer.token().to_string())
}
