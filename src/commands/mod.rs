//! Command implementations behind the CLI subcommands

mod config;
mod show;
mod view;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use show::cmd_show;
pub use view::cmd_view;

use serde_json::Value;

use crate::api::ProfileClient;
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;

/// Output of a command in both machine and human form
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print JSON when requested or when no text form exists
    pub fn print(self, output: OutputOptions) -> Result<()> {
        match self.text {
            Some(text) if !output.json => println!("{}", text),
            _ => print_json(&self.json)?,
        }
        Ok(())
    }
}

/// Print a value as pretty JSON
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build the HTTP client, letting `api_url` override the configured base
pub fn build_client(api_url: Option<&str>) -> Result<ProfileClient> {
    let config = Config::load()?;
    match api_url {
        Some(url) => ProfileClient::new(url, config.api_timeout()),
        None => ProfileClient::from_config(&config),
    }
}
