use std::io::IsTerminal;

use super::{build_client, print_json};
use crate::api::validate_user_id;
use crate::cli::OutputOptions;
use crate::display::render_profile_text;
use crate::error::{ProfileError, Result};
use crate::profile::{ProfileState, load_profile_state};

/// Fetch one profile and print it
pub async fn cmd_show(user_id: &str, api_url: Option<&str>, output: OutputOptions) -> Result<()> {
    let user_id = validate_user_id(user_id)?;
    let client = build_client(api_url)?;

    let record = match load_profile_state(&client, user_id).await {
        ProfileState::Ready(record) => record,
        ProfileState::Error(message) => return Err(ProfileError::Other(message)),
        ProfileState::Loading => {
            return Err(ProfileError::Other("profile fetch did not finish".to_string()));
        }
    };

    if output.json {
        return print_json(&serde_json::to_value(&record)?);
    }

    let colored = std::io::stdout().is_terminal();
    println!(
        "{}",
        render_profile_text(&ProfileState::Ready(record), colored)
    );
    Ok(())
}
