use anyhow::Result;

use crate::launchd::{LaunchAgent, UninstallOutcome, display_path};

pub fn run() -> Result<()> {
    let agent = LaunchAgent::for_current_user()?;

    match agent.uninstall()? {
        UninstallOutcome::Removed => {
            let short_path = display_path(agent.path(), dirs::home_dir().as_deref());
            println!("Removed {}", short_path);
        }
        UninstallOutcome::NotInstalled => {
            eprintln!("notifyserver was not installed in launchd");
        }
    }

    Ok(())
}
