//! API routes module

pub mod notify;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    // Notification routes live at the root so existing clients can
    // keep posting to `/notify`
    Router::new().merge(notify::router())
}
