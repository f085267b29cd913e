use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};

/// Sounds available to native notifications. Names match the system
/// sounds shipped in `/System/Library/Sounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Default,
    Basso,
    Blow,
    Bottle,
    Frog,
    Funk,
    Glass,
    Hero,
    Morse,
    Ping,
    Pop,
    Purr,
    Sosumi,
    Submarine,
    Tink,
}

impl Sound {
    const ALL: [Sound; 15] = [
        Sound::Default,
        Sound::Basso,
        Sound::Blow,
        Sound::Bottle,
        Sound::Frog,
        Sound::Funk,
        Sound::Glass,
        Sound::Hero,
        Sound::Morse,
        Sound::Ping,
        Sound::Pop,
        Sound::Purr,
        Sound::Sosumi,
        Sound::Submarine,
        Sound::Tink,
    ];

    /// The name the notifier expects on its command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Default => "default",
            Sound::Basso => "Basso",
            Sound::Blow => "Blow",
            Sound::Bottle => "Bottle",
            Sound::Frog => "Frog",
            Sound::Funk => "Funk",
            Sound::Glass => "Glass",
            Sound::Hero => "Hero",
            Sound::Morse => "Morse",
            Sound::Ping => "Ping",
            Sound::Pop => "Pop",
            Sound::Purr => "Purr",
            Sound::Sosumi => "Sosumi",
            Sound::Submarine => "Submarine",
            Sound::Tink => "Tink",
        }
    }

    /// Find a sound in the table. Names are upper-cased before
    /// matching so `default`, `Default` and `DEFAULT` are the same.
    pub fn lookup(name: &str) -> Option<Sound> {
        let key = name.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|sound| sound.as_str().to_uppercase() == key)
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sound {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sound::lookup(s).ok_or_else(|| anyhow!("Unknown sound: {}", s))
    }
}

/// A notification ready to be handed to a `Notifier`. Optional fields
/// that were empty on the wire are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    // Notifications sharing a group replace each other
    pub group: Option<String>,
    // Bundle identifier of the app to activate on click
    pub activate: Option<String>,
    // URL opened on click
    pub link: Option<String>,
    pub sound: Option<Sound>,
}

impl Notification {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_looks_up_sounds_case_insensitively() {
        assert_eq!(Sound::lookup("default"), Some(Sound::Default));
        assert_eq!(Sound::lookup("DEFAULT"), Some(Sound::Default));
        assert_eq!(Sound::lookup("submarine"), Some(Sound::Submarine));
        assert_eq!(Sound::lookup("Glass"), Some(Sound::Glass));
    }

    #[test]
    fn it_returns_none_for_unknown_sounds() {
        assert_eq!(Sound::lookup("trombone"), None);
        assert_eq!(Sound::lookup(""), None);
    }

    #[test]
    fn it_parses_sounds_from_str() {
        assert_eq!("pop".parse::<Sound>().unwrap(), Sound::Pop);

        let err = "kazoo".parse::<Sound>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown sound: kazoo");
    }

    #[test]
    fn it_displays_the_notifier_name() {
        assert_eq!(Sound::Default.to_string(), "default");
        assert_eq!(Sound::Sosumi.to_string(), "Sosumi");
    }
}
