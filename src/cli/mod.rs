use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod install;
pub mod send;
pub mod serve;
pub mod uninstall;

use crate::api::public::notify::NotificationRequest;
use crate::core::DEFAULT_HTTP_ADDR;
use send::DEFAULT_NOTIFY_URL;

#[derive(Subcommand)]
enum Command {
    /// Run the server in the foreground
    Run {
        /// Listen on the desired address
        #[arg(long, short = 'l', default_value = DEFAULT_HTTP_ADDR)]
        http: String,
    },
    /// Install as a launchd agent for the current user
    Install {
        /// Path to the notifyserver binary (defaults to the first one on $PATH)
        #[arg(long, short = 'b')]
        bin: Option<PathBuf>,

        /// Address the installed server listens on
        #[arg(long, short = 'l')]
        http: Option<String>,
    },
    /// Uninstall the launchd agent (if installed)
    Uninstall {},
    /// Send a notification to a running server
    Send {
        /// URL of the server's notify endpoint
        #[arg(long, default_value = DEFAULT_NOTIFY_URL)]
        url: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        subtitle: Option<String>,
        #[arg(long)]
        group: Option<String>,
        /// Bundle identifier of the app to activate on click
        #[arg(long)]
        activate: Option<String>,
        /// URL to open on click
        #[arg(long)]
        link: Option<String>,
        #[arg(long)]
        sound: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Command::Run { http } => {
            serve::run(http).await?;
        }
        Command::Install { bin, http } => {
            install::run(bin, http)?;
        }
        Command::Uninstall {} => {
            uninstall::run()?;
        }
        Command::Send {
            url,
            message,
            title,
            subtitle,
            group,
            activate,
            link,
            sound,
        } => {
            let req = NotificationRequest {
                message,
                title: title.unwrap_or_default(),
                subtitle: subtitle.unwrap_or_default(),
                group: group.unwrap_or_default(),
                activate: activate.unwrap_or_default(),
                link: link.unwrap_or_default(),
                sound: sound.unwrap_or_default(),
            };
            send::run(&url, &req).await?;
        }
    }

    Ok(())
}
