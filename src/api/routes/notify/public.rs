//! Public types for the notify API
use serde::{Deserialize, Deserializer, Serialize};

use crate::notify::{Notification, Sound};

/// Body of `POST /notify`. Every field is optional on the wire and
/// decodes to an empty string when missing or `null`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub title: String,
    #[serde(
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub subtitle: String,
    #[serde(
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub group: String,
    #[serde(
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub activate: String,
    #[serde(
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub link: String,
    #[serde(
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub sound: String,
}

// Clients often send unset options as `null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

impl From<NotificationRequest> for Notification {
    fn from(req: NotificationRequest) -> Self {
        let sound = if req.sound.is_empty() {
            None
        } else {
            let sound = Sound::lookup(&req.sound);
            if sound.is_none() {
                tracing::warn!("Ignoring unknown sound: {}", req.sound);
            }
            sound
        };

        Self {
            message: req.message,
            title: non_empty(req.title),
            subtitle: non_empty(req.subtitle),
            group: non_empty(req.group),
            activate: non_empty(req.activate),
            link: non_empty(req.link),
            sound,
        }
    }
}
