use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum::http::header::AUTHORIZATION;
use jsonwebtoken::decode;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

/// Claims carried by the bearer token. Tokens are issued elsewhere; this
/// service only verifies them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub exp: i64,
}

/// Resolved caller identity, inserted as a request extension for every
/// request. Handlers that require a login call [`AppUser::user_id`].
#[derive(Debug, Clone)]
pub enum AppUser {
    Token(Claims),
    Anonymous,
}

impl AppUser {
    /// The caller's user id, or 401 when the request carried no credential.
    pub fn user_id(&self) -> Result<i32, ApiError> {
        match self {
            AppUser::Token(claims) => Ok(claims.user_id),
            AppUser::Anonymous => Err(ApiError::unauthorized("Login required")),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, AppUser::Anonymous)
    }
}

/// Verifies the `Authorization: Bearer <token>` header.
///
/// A missing header resolves to [`AppUser::Anonymous`] so public routes
/// keep working; a present but invalid token is rejected here with 403.
pub async fn jwt_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = match bearer_token(&request) {
        Some(token) => {
            let data = decode::<Claims>(token, &state.jwt_decoding_key, &state.jwt_validation)?;
            AppUser::Token(data.claims)
        }
        None => AppUser::Anonymous,
    };

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, encode};

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("Failed to sign")
    }

    #[test]
    fn claims_roundtrip() {
        let claims = Claims {
            user_id: 7,
            exp: chrono::Utc::now().timestamp() + 3600,
        };
        let token = sign(&claims, "test-secret");

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::new(jsonwebtoken::Algorithm::HS256),
        )
        .expect("Failed to verify");

        assert_eq!(decoded.claims.user_id, 7);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = Claims {
            user_id: 7,
            exp: chrono::Utc::now().timestamp() + 3600,
        };
        let token = sign(&claims, "test-secret");

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other-secret"),
            &Validation::new(jsonwebtoken::Algorithm::HS256),
        );
        assert!(result.is_err());
    }

    #[test]
    fn anonymous_user_gets_401() {
        let err = AppUser::Anonymous.user_id().unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::UNAUTHORIZED);
    }
}
