use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse a remote people directory from the terminal")]
#[command(version)]
pub struct Cli {
    /// Path to a YAML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the directory and print the card gallery
    #[command(visible_alias = "g")]
    Gallery {
        /// Only show people whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one person's details, optionally stepping to a neighbour
    #[command(visible_alias = "s")]
    Show {
        /// Full name as shown on the card (e.g. "Ann Lee"), or an email with --by-email
        who: String,

        /// Look the person up by email instead of full name
        #[arg(long)]
        by_email: bool,

        /// Search term defining the gallery that --step moves through
        #[arg(short, long)]
        search: Option<String>,

        /// Move this many people forward (negative: backward), wrapping at the ends
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        step: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse the directory interactively (type 'help' once started)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{ShowOptions, cmd_browse, cmd_config_show, cmd_gallery, cmd_show};

        if let Commands::Completions { shell } = self.command {
            generate_completions(shell);
            return Ok(());
        }

        let config = Config::load(self.config.as_deref())?;

        match self.command {
            Commands::Gallery { search, json } => {
                cmd_gallery(&config, search.as_deref(), json).await
            }
            Commands::Show {
                who,
                by_email,
                search,
                step,
                json,
            } => {
                let options = ShowOptions {
                    who,
                    by_email,
                    search,
                    step,
                };
                cmd_show(&config, &options, json).await
            }
            Commands::Browse { search } => cmd_browse(&config, search.as_deref()).await,
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(&config, json),
            },
            Commands::Completions { .. } => Ok(()),
        }
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "roster", &mut io::stdout());
}
