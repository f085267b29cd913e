pub mod models;
pub mod terminal;
pub use models::*;
pub use terminal::TerminalNotifier;

use anyhow::Result;
use async_trait::async_trait;

/// Hands a notification to the host's notification center. Delivery
/// either succeeds or returns the reason it could not be shown.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, notification: &Notification) -> Result<()>;
}
