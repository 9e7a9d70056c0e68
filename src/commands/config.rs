//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Validate and store one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{API_URL_ENV, Config};
use crate::error::Result;

/// Show current configuration
///
/// `api_url` is the global `--api-url` flag, which wins over both the
/// environment and the file when reporting the effective URL.
pub fn cmd_config_show(api_url: Option<&str>, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let (effective_url, override_source) = match api_url {
        Some(url) => (url.to_string(), Some("--api-url".to_string())),
        None => {
            let url = config.api_url();
            let source = (url != config.api.url).then(|| API_URL_ENV.to_string());
            (url, source)
        }
    };

    let json_output = json!({
        "api": {
            "url": config.api.url,
            "timeout": config.api.timeout,
        },
        "effective_api_url": effective_url,
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!("{}:\n", "api".cyan()));
    text_output.push_str(&format!("  url: {}\n", config.api.url));
    if let Some(source) = &override_source {
        text_output.push_str(&format!(
            "  {}\n",
            format!("(overridden by {source}: {effective_url})").dimmed()
        ));
    }
    text_output.push_str(&format!("  timeout: {}s\n", config.api.timeout));
    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    let mut config = Config::load()?;
    let previous = config.get(key)?;
    config.set(key, value)?;
    config.save()?;

    let current = config.get(key)?;
    tracing::info!(key, value = %current, "config updated");

    let json_output = json!({
        "action": "config_set",
        "key": key,
        "value": current,
        "previous_value": previous,
    });
    let text_output = format!("Set {} = {}", key, current);

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    let json_output = json!({
        "key": key,
        "value": value,
    });

    CommandOutput::new(json_output)
        .with_text(value)
        .print(output)
}
