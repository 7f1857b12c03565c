use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "chatmenu", about = "Terminal chat menu with locale-aware channel management")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Locale id overriding `locale.default` from the config (e.g. en, zh-CN)
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the TUI menu
    Run,
    /// List the locales compiled into the binary
    Locales,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}
