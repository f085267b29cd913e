//! Install and remove notifyserver as a per-user launchd agent.

pub mod plist;
pub use plist::{LAUNCHD_LABEL, render_plist};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninstallOutcome {
    Removed,
    NotInstalled,
}

/// Location of the agent's plist on disk
#[derive(Debug, Clone)]
pub struct LaunchAgent {
    path: PathBuf,
}

impl LaunchAgent {
    /// The agent in the current user's `~/Library/LaunchAgents`
    pub fn for_current_user() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow!("Unable to find the home directory for the current user"))?;
        Ok(Self::in_home(&home))
    }

    pub fn in_home(home: &Path) -> Self {
        Self::at(
            home.join("Library")
                .join("LaunchAgents")
                .join(format!("{}.plist", LAUNCHD_LABEL)),
        )
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_installed(&self) -> bool {
        self.path.is_file()
    }

    /// Write the plist for `bin`, replacing any existing one. The file
    /// is written next to its destination and renamed into place so a
    /// crash never leaves a partial plist behind.
    pub fn install(&self, bin: &Path, http_addr: Option<&str>) -> Result<()> {
        if !bin.is_file() {
            bail!("Cannot find notifyserver binary at: '{}'", bin.display());
        }
        let bin = fs::canonicalize(bin)
            .with_context(|| format!("Failed to resolve {}", bin.display()))?;
        let contents = render_plist(&bin, http_addr)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let tmp_path = self.path.with_extension("plist.tmp");
        fs::write(&tmp_path, contents)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err).with_context(|| format!("Failed to write {}", self.path.display()));
        }

        tracing::debug!("Installed launchd agent at {}", self.path.display());
        Ok(())
    }

    pub fn uninstall(&self) -> Result<UninstallOutcome> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(UninstallOutcome::Removed),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(UninstallOutcome::NotInstalled),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to remove {}", self.path.display()))
            }
        }
    }
}

/// Abbreviate `path` with `~` when it lives under `home`
pub fn display_path(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) => Path::new("~").join(rest).display().to_string(),
        None => path.display().to_string(),
    }
}

/// Find `name` in a colon separated list of directories such as `$PATH`
pub fn find_in_search_path(search_path: &str, name: &str) -> Option<PathBuf> {
    search_path
        .split(':')
        .filter(|dir| !dir.is_empty())
        .map(|dir| Path::new(dir).join(name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_places_the_agent_in_launch_agents() {
        let agent = LaunchAgent::in_home(Path::new("/Users/me"));
        assert_eq!(
            agent.path(),
            Path::new("/Users/me/Library/LaunchAgents/com.github.nemith.notifyserver.plist")
        );
    }

    #[test]
    fn it_abbreviates_the_home_directory() {
        let path = Path::new("/Users/me/Library/LaunchAgents/x.plist");
        assert_eq!(
            display_path(path, Some(Path::new("/Users/me"))),
            "~/Library/LaunchAgents/x.plist"
        );
        assert_eq!(
            display_path(path, Some(Path::new("/Users/you"))),
            "/Users/me/Library/LaunchAgents/x.plist"
        );
        assert_eq!(display_path(path, None), "/Users/me/Library/LaunchAgents/x.plist");
    }

    #[test]
    fn it_finds_the_first_match_in_the_search_path() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(second.path().join("notifyserver"), "").unwrap();

        let search_path = format!(
            "{}::{}",
            first.path().display(),
            second.path().display()
        );
        assert_eq!(
            find_in_search_path(&search_path, "notifyserver"),
            Some(second.path().join("notifyserver"))
        );
        assert_eq!(find_in_search_path(&search_path, "other"), None);
        assert_eq!(find_in_search_path("", "notifyserver"), None);
    }
}
