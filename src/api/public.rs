//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;

// Errors

/// A failure the client can't fix by changing its request, in
/// practice the notifier refusing, crashing or timing out. Bad input
/// is answered with a 422 by the handler and never gets here.
pub struct ApiError(anyhow::Error);

/// Log the failure and answer 500 so one broken delivery doesn't take
/// the server down with it.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Notification failed: {:#}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to deliver notification: {}", self.0),
        )
            .into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Re-export public types from each route

pub mod notify {
    pub use crate::api::routes::notify::public::*;
}
