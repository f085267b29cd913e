//! Client for a running notifyserver, useful from scripts and chat
//! client hooks.

use anyhow::{Result, bail};

use crate::api::public::notify::NotificationRequest;

pub const DEFAULT_NOTIFY_URL: &str = "http://localhost:9999/notify";

pub async fn run(url: &str, req: &NotificationRequest) -> Result<()> {
    send_notification(url, req).await?;
    println!("Notification sent");
    Ok(())
}

/// POST a notification to `url`. Any non-2xx response is an error
/// that includes the server's response body.
pub async fn send_notification(url: &str, req: &NotificationRequest) -> Result<()> {
    let resp = reqwest::Client::new()
        .post(url)
        .header("Content-Type", "application/json")
        .json(req)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        bail!("notifyserver responded with {}: {}", status, body.trim());
    }

    Ok(())
}
