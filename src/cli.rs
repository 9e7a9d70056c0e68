use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "buyer-profile")]
#[command(about = "Look up a buyer's contact details and purchased tickets")]
#[command(version)]
pub struct Cli {
    /// Backend base URL for this run (overrides config and environment)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a profile once and print it
    #[command(visible_alias = "s")]
    Show {
        /// User identifier
        user_id: String,

        /// Print the raw profile record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse a profile in the interactive TUI
    #[command(visible_alias = "v")]
    View {
        /// User identifier shown first
        user_id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api.url, api.timeout)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api.url, api.timeout)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Output format selection shared by commands
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

impl OutputOptions {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}
