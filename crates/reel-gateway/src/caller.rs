use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use reel_core::api::CALLER_HEADER;

use crate::error::AppError;

/// The authenticated name of whoever sent the request.
///
/// An upstream auth layer may insert a `Caller` into the request extensions;
/// otherwise the name is read from the [`CALLER_HEADER`] header. Identities
/// are opaque and are not verified here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(pub String);

impl Caller {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(caller) = parts.extensions.get::<Caller>() {
            if !caller.0.is_empty() {
                return Ok(caller.clone());
            }
        }

        parts
            .headers
            .get(CALLER_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|name| !name.is_empty())
            .map(|name| Caller(name.to_owned()))
            .ok_or(AppError::Unauthenticated)
    }
}
