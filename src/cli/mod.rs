//! CLI entry point for sitechat.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// sitechat CLI
#[derive(Parser, Debug)]
#[command(name = "sitechat", version, about = "Chat with an assistant grounded in a web page")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the context string collected from a page
    Context(PageArgs),
    /// Start a chat session about a page
    Chat(ChatArgs),
}

/// A page on disk and the URL it is served from.
#[derive(Parser, Debug)]
pub struct PageArgs {
    /// HTML file to read
    pub page: PathBuf,

    /// URL reported as the page address
    #[arg(short, long)]
    pub url: Option<String>,
}

/// Arguments for the `chat` subcommand.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Gemini model ID (default: gemini-2.0-flash)
    #[arg(short, long)]
    pub model: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
