//! Test utilities for integration tests
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum::{Router, body::Body};

use notifyserver::api::AppState;
use notifyserver::api::app;
use notifyserver::notify::{Notification, Notifier};

/// A `Notifier` that records every delivery instead of showing it.
#[derive(Default)]
pub struct RecordingNotifier {
    delivered: Mutex<Vec<Notification>>,
    fail: bool,
}

impl RecordingNotifier {
    /// A notifier whose deliveries always fail
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn deliver(&self, notification: &Notification) -> Result<()> {
        self.delivered.lock().unwrap().push(notification.clone());
        if self.fail {
            return Err(anyhow!("Notification center unavailable"));
        }
        Ok(())
    }
}

/// Creates a test application router that delivers to `notifier`.
pub fn test_app(notifier: Arc<RecordingNotifier>) -> Router {
    let app_state = AppState::new(notifier);
    app(Arc::new(app_state))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
