//! Delivery through `terminal-notifier`, a small command line wrapper
//! around the macOS Notification Center.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tokio::process::Command;

use super::{Notification, Notifier};
use crate::core::AppConfig;

#[derive(Debug, Clone)]
pub struct TerminalNotifier {
    program: String,
    timeout: Duration,
}

impl TerminalNotifier {
    pub fn new(program: &str, timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.notifier_path, config.delivery_timeout)
    }

    /// Command line arguments for a notification. Fields that are not
    /// set are left off entirely.
    pub fn args(notification: &Notification) -> Vec<String> {
        let mut args = vec![String::from("-message"), notification.message.clone()];

        let optional = [
            ("-title", &notification.title),
            ("-subtitle", &notification.subtitle),
            ("-group", &notification.group),
            ("-activate", &notification.activate),
            ("-open", &notification.link),
        ];
        for (flag, value) in optional {
            if let Some(value) = value {
                args.push(flag.to_string());
                args.push(value.clone());
            }
        }

        if let Some(sound) = notification.sound {
            args.push(String::from("-sound"));
            args.push(sound.to_string());
        }

        args
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn deliver(&self, notification: &Notification) -> Result<()> {
        let output = Command::new(&self.program)
            .args(Self::args(notification))
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, output)
            .await
            .map_err(|_| anyhow!("{} timed out after {:?}", self.program, self.timeout))?
            .with_context(|| format!("Failed to run {}", self.program))?;

        if !output.status.success() {
            return Err(anyhow!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        tracing::debug!("Delivered notification with {}", self.program);
        Ok(())
    }
}
