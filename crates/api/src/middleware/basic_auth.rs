//! Basic-auth extractor guarding the admin handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use hourlypitch_core::error::CoreError;

use crate::auth::basic::parse_basic_auth;
use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried valid admin Basic credentials.
///
/// Add it as the first parameter of any admin handler. When the check fails
/// the handler body never runs and the client receives a 401 challenge:
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin) -> &'static str {
///     "secret"
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credentials = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_basic_auth);

        match credentials {
            Some(creds) if state.config.admin.verify(&creds) => Ok(RequireAdmin),
            Some(_) => {
                tracing::warn!(path = %parts.uri.path(), "Rejected admin credentials");
                Err(AppError::Core(CoreError::Unauthorized(
                    "Invalid credentials".into(),
                )))
            }
            None => Err(AppError::Core(CoreError::Unauthorized(
                "Missing credentials".into(),
            ))),
        }
    }
}
