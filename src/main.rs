use clap::Parser;
use std::process::ExitCode;

use buyer_profile::cli::{Cli, Commands, ConfigAction, OutputOptions};
use buyer_profile::commands::{
    cmd_config_get, cmd_config_set, cmd_config_show, cmd_show, cmd_view,
};
use buyer_profile::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let _log_guard = init_logging();

    let api_url = cli.api_url.as_deref();
    let result = match cli.command {
        Commands::Show { user_id, json } => {
            cmd_show(&user_id, api_url, OutputOptions::new(json)).await
        }
        Commands::View { user_id } => cmd_view(&user_id, api_url).await,
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(api_url, OutputOptions::new(json)),
            ConfigAction::Set { key, value, json } => {
                cmd_config_set(&key, &value, OutputOptions::new(json))
            }
            ConfigAction::Get { key, json } => cmd_config_get(&key, OutputOptions::new(json)),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
