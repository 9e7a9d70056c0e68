//! Profile state machine and display formatting, independent of any renderer.

pub mod format;
pub mod model;

pub use format::{NO_TICKETS, NOT_AVAILABLE, StatusTone, TicketStatus};
pub use model::{
    ContactModel, FetchTicket, ProfileAction, ProfilePageModel, ProfileSlot, ProfileState,
    ProfileStatus, ProfileViewModel, TicketCardModel, compute_profile_page,
    compute_profile_view_model, reduce_profile_slot,
};

use crate::api::ProfileSource;

/// Run one complete fetch cycle against `source` and return the final state.
///
/// Failures never propagate: they become [`ProfileState::Error`].
pub async fn load_profile_state<S: ProfileSource>(source: &S, user_id: &str) -> ProfileState {
    let mut slot = ProfileSlot::default();
    let ticket = slot.begin(user_id);
    let outcome = match source.fetch_profile(user_id).await {
        Ok(record) => Ok(record),
        Err(e) => {
            tracing::error!(user_id, error = %e, "error fetching profile");
            Err(e.to_string())
        }
    };
    slot.complete(&ticket, outcome);
    slot.state
}
