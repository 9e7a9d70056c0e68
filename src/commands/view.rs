//! Profile browser command (`buyer-profile view`)

use iocraft::prelude::*;

use super::build_client;
use crate::api::validate_user_id;
use crate::error::{ProfileError, Result};
use crate::tui::ProfileBrowser;

/// Launch the profile browser TUI
pub async fn cmd_view(user_id: &str, api_url: Option<&str>) -> Result<()> {
    let user_id = validate_user_id(user_id)?.to_string();
    let client = build_client(api_url)?;
    tracing::info!(user_id = %user_id, base_url = %client.base_url(), "opening profile browser");

    element!(ProfileBrowser(user_id: user_id, client: Some(client)))
        .fullscreen()
        .await
        .map_err(|e| ProfileError::Other(format!("TUI error: {}", e)))
}
