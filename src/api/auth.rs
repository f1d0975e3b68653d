use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::models::user::{User, UserRole};

/// The authenticated caller, inserted into request extensions by [`require_user`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// Rejects requests without a valid API key.
///
/// Accepts `X-Api-Key: <key>` or `Authorization: Bearer <key>`.
pub async fn require_user(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = resolve_caller(&state, request.headers())
        .await?
        .ok_or_else(|| ApiError::Unauthorized("A valid API key is required".to_string()))?;

    tracing::Span::current().record("user_id", user.id.as_str());
    request.extensions_mut().insert(AuthUser(user));
    Ok(next.run(request).await)
}

/// Rejects authenticated callers without the `brand` role.
///
/// Must run after [`require_user`].
pub async fn require_brand(request: Request, next: Next) -> Result<Response, ApiError> {
    let Some(AuthUser(user)) = request.extensions().get::<AuthUser>() else {
        return Err(ApiError::Unauthorized(
            "A valid API key is required".to_string(),
        ));
    };

    if user.role != UserRole::Brand {
        return Err(ApiError::Forbidden(
            "This action requires a brand account".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

/// Resolves the caller from request headers, if a key is present and valid.
pub async fn resolve_caller(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Option<User>, ApiError> {
    let Some(key) = extract_api_key(headers) else {
        return Ok(None);
    };

    Ok(state.shared.user_service.authenticate(&key).await?)
}

/// Extract API key from headers
fn extract_api_key(headers: &HeaderMap) -> Option<String> {
    // Check X-Api-Key header
    if let Some(api_key) = headers.get("X-Api-Key")
        && let Ok(key_str) = api_key.to_str()
    {
        return Some(key_str.trim().to_string());
    }

    // Check Authorization: Bearer header
    if let Some(auth_header) = headers.get("Authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
    {
        return Some(token.trim().to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extracts_key_from_either_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_api_key(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Bearer abc123"));
        assert_eq!(extract_api_key(&headers).as_deref(), Some("abc123"));

        headers.insert("X-Api-Key", HeaderValue::from_static("xyz"));
        assert_eq!(extract_api_key(&headers).as_deref(), Some("xyz"));
    }

    #[test]
    fn ignores_non_bearer_authorization() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(extract_api_key(&headers), None);
    }
}
