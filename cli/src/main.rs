//! QuitAll CLI - Quit open windowed apps in bulk
//!
//! A command-line tool for listing the apps that currently hold visible
//! windows and terminating them, minus a protected exclusion list.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quitall")]
#[command(author, version, about = "Quit open windowed apps in bulk")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List open windowed apps
    #[command(alias = "ls")]
    List,

    /// Quit apps by name, or every open app
    Quit {
        /// App names to quit
        apps: Vec<String>,

        /// Quit every open app instead of naming them
        #[arg(long, conflicts_with = "apps")]
        all: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the comma-separated exclusion list
    SetExcluded { list: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List) | None => {
            commands::list::run(cli.json).await?;
        }
        Some(Commands::Quit { apps, all }) => {
            commands::quit::run(apps, all, cli.json).await?;
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(cli.json).await?,
            ConfigAction::SetExcluded { list } => commands::config::set_excluded(&list).await?,
        },
    }

    Ok(())
}
