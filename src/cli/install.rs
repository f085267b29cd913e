use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};

use crate::core::BIN_NAME;
use crate::launchd::{LaunchAgent, display_path, find_in_search_path};

pub fn run(bin: Option<PathBuf>, http: Option<String>) -> Result<()> {
    let bin = bin.or_else(default_bin).ok_or_else(|| {
        anyhow!("Cannot find binary for notifyserver. Try 'cargo install notifyserver'")
    })?;

    let agent = LaunchAgent::for_current_user()?;
    agent.install(&bin, http.as_deref())?;

    let short_path = display_path(agent.path(), dirs::home_dir().as_deref());
    println!(
        "notifyserver launchd job has been installed and will start automatically when you log in to your system.\n"
    );
    println!("To start the notifyserver now:\n\tlaunchctl load {}", short_path);
    println!("To stop the notifyserver:\n\tlaunchctl unload {}", short_path);

    Ok(())
}

// The first notifyserver found on $PATH
fn default_bin() -> Option<PathBuf> {
    env::var("PATH")
        .ok()
        .and_then(|search_path| find_in_search_path(&search_path, BIN_NAME))
}
