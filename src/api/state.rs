use std::sync::Arc;

use crate::notify::Notifier;

pub struct AppState {
    // Backend every request is forwarded to
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }
}
