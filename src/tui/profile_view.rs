//! Stateful profile view
//!
//! Owns the profile state slot, issues a fetch whenever the requested user
//! id (or the reload counter) changes, and renders the result through
//! [`ProfilePage`]. Responses for superseded requests are dropped by the
//! slot's generation check.

use iocraft::prelude::*;

use crate::api::{ProfileClient, ProfileSource};
use crate::profile::{
    FetchTicket, ProfileAction, ProfileSlot, ProfileStatus, compute_profile_view_model,
    reduce_profile_slot,
};
use crate::types::ProfileRecord;

use super::components::ProfilePage;

/// Props for the ProfileView component
#[derive(Default, Props)]
pub struct ProfileViewProps {
    /// Identifier of the user to show
    pub user_id: String,
    /// Client used for fetching; a view without one shows an error
    pub client: Option<ProfileClient>,
    /// Bumped by the parent to force a refetch of the same user
    pub reload: u64,
    /// Number of ticket cards scrolled out of view
    pub scroll_offset: usize,
    /// Receives a summary of what is being shown
    pub on_status: Option<State<ProfileStatus>>,
}

/// What has already been requested: (user id, reload counter)
type RequestKey = (String, u64);

#[component]
pub fn ProfileView(props: &ProfileViewProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let mut slot: State<ProfileSlot> = hooks.use_state(ProfileSlot::default);
    let mut requested: State<Option<RequestKey>> = hooks.use_state(|| None);

    let fetch_handler: Handler<FetchTicket> = hooks.use_async_handler({
        let client = props.client.clone();

        move |ticket: FetchTicket| {
            let client = client.clone();
            let mut slot = slot;

            async move {
                let outcome = fetch_outcome(client.as_ref(), &ticket.user_id).await;
                let current = slot.read().clone();
                let (next, _) =
                    reduce_profile_slot(current, ProfileAction::Completed { ticket, outcome });
                slot.set(next);
            }
        }
    });

    // Start a fetch when the user id or reload counter changed
    let key: RequestKey = (props.user_id.clone(), props.reload);
    let needs_fetch = requested.read().as_ref() != Some(&key);
    if needs_fetch {
        requested.set(Some(key));
        let current = slot.read().clone();
        let (next, ticket) = reduce_profile_slot(
            current,
            ProfileAction::Request {
                user_id: props.user_id.clone(),
            },
        );
        slot.set(next);
        if let Some(ticket) = ticket {
            tracing::debug!(
                generation = ticket.generation,
                user_id = %ticket.user_id,
                "requesting profile"
            );
            fetch_handler(ticket);
        }
    }

    let model = compute_profile_view_model(&slot.read().state);

    if let Some(mut on_status) = props.on_status {
        let status = model.status();
        if on_status.get() != status {
            on_status.set(status);
        }
    }

    element! {
        ProfilePage(model: model, scroll_offset: props.scroll_offset)
    }
}

async fn fetch_outcome(
    client: Option<&ProfileClient>,
    user_id: &str,
) -> Result<ProfileRecord, String> {
    let Some(client) = client else {
        return Err("No profile client configured".to_string());
    };
    client.fetch_profile(user_id).await.map_err(|e| {
        tracing::error!(user_id, error = %e, "error fetching profile");
        e.to_string()
    })
}
