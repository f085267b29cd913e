//! Router for the notify API

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use http::StatusCode;

use super::public;
use crate::api::state::AppState;
use crate::notify::Notification;

type SharedState = Arc<AppState>;

// Decode a notification and forward it to the OS. The body is read
// as raw bytes so clients don't need to send a JSON content type.
async fn notify(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Response, crate::api::public::ApiError> {
    let req: public::NotificationRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(err) => {
            tracing::debug!("Rejecting notification: {}", err);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, "Invalid json").into_response());
        }
    };

    if req.message.is_empty() {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, "Missing message").into_response());
    }

    let notification = Notification::from(req);
    state.notifier.deliver(&notification).await?;

    Ok(StatusCode::OK.into_response())
}

/// Create the notify router
pub fn router() -> Router<SharedState> {
    Router::new().route("/notify", axum::routing::post(notify))
}
