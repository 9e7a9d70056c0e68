//! Profile view state and view-model computation.
//!
//! This module separates state (ProfileSlot) from view (ProfileViewModel)
//! enabling unit testing without the iocraft framework.

use crate::types::{ProfileRecord, TicketRecord};

use super::format::{
    NO_TICKETS, TicketStatus, format_number, format_optional_number, format_restrictions,
    format_venue, or_empty, or_not_available,
};

/// What the profile view currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProfileState {
    /// No data and no error yet
    #[default]
    Loading,
    /// The fetch failed; holds the failure's message
    Error(String),
    /// The fetch succeeded
    Ready(ProfileRecord),
}

/// Tag attached to every fetch so its completion can be matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub user_id: String,
}

/// Events that move the profile state machine
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    /// A fetch for `user_id` is about to be issued
    Request { user_id: String },
    /// A fetch finished, successfully or not
    Completed {
        ticket: FetchTicket,
        outcome: Result<ProfileRecord, String>,
    },
}

/// The component's single state slot
#[derive(Debug, Clone, Default)]
pub struct ProfileSlot {
    /// Current state
    pub state: ProfileState,
    /// Tag of the most recently issued fetch
    pub current: Option<FetchTicket>,
    last_generation: u64,
}

impl ProfileSlot {
    /// Enter `Loading` and return the tag for the fetch to issue
    pub fn begin(&mut self, user_id: &str) -> FetchTicket {
        self.last_generation += 1;
        let ticket = FetchTicket {
            generation: self.last_generation,
            user_id: user_id.to_string(),
        };
        self.state = ProfileState::Loading;
        self.current = Some(ticket.clone());
        ticket
    }

    /// Apply a fetch outcome if it belongs to the latest request.
    ///
    /// Returns `false` when the outcome was stale and dropped.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<ProfileRecord, String>,
    ) -> bool {
        if self.current.as_ref() != Some(ticket) {
            return false;
        }
        self.state = match outcome {
            Ok(record) => ProfileState::Ready(record),
            Err(message) => ProfileState::Error(message),
        };
        true
    }

    /// Identifier of the latest request, if any
    pub fn current_user_id(&self) -> Option<&str> {
        self.current.as_ref().map(|t| t.user_id.as_str())
    }
}

/// Pure function: apply an action to the slot.
///
/// Returns the new slot and, for `Request`, the ticket to fetch with.
pub fn reduce_profile_slot(
    mut slot: ProfileSlot,
    action: ProfileAction,
) -> (ProfileSlot, Option<FetchTicket>) {
    match action {
        ProfileAction::Request { user_id } => {
            let ticket = slot.begin(&user_id);
            (slot, Some(ticket))
        }
        ProfileAction::Completed { ticket, outcome } => {
            if !slot.complete(&ticket, outcome) {
                tracing::warn!(
                    generation = ticket.generation,
                    user_id = %ticket.user_id,
                    "discarding stale profile response"
                );
            }
            (slot, None)
        }
    }
}

// ============================================================================
// View Models
// ============================================================================

/// Computed view model for the profile view
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProfileViewModel {
    #[default]
    Loading,
    Error {
        message: String,
    },
    Ready(ProfilePageModel),
}

/// Compact summary of a view model for surrounding chrome (header hints)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileStatus {
    #[default]
    Loading,
    Failed,
    Ready {
        tickets: usize,
    },
}

impl ProfileStatus {
    /// Short hint shown next to the title
    pub fn hint(&self) -> String {
        match self {
            ProfileStatus::Loading => "loading".to_string(),
            ProfileStatus::Failed => "error".to_string(),
            ProfileStatus::Ready { tickets: 1 } => "1 ticket".to_string(),
            ProfileStatus::Ready { tickets } => format!("{} tickets", tickets),
        }
    }
}

impl ProfileViewModel {
    pub fn status(&self) -> ProfileStatus {
        match self {
            ProfileViewModel::Loading => ProfileStatus::Loading,
            ProfileViewModel::Error { .. } => ProfileStatus::Failed,
            ProfileViewModel::Ready(page) => ProfileStatus::Ready {
                tickets: page.tickets.len(),
            },
        }
    }
}

/// Everything the ready profile page renders, already formatted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePageModel {
    /// `name surname`
    pub full_name: String,
    pub email: String,
    pub contact: ContactModel,
    /// One card per ticket, server order
    pub tickets: Vec<TicketCardModel>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactModel {
    pub phone: String,
    pub last_login: String,
    pub balance: String,
    pub birth_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketCardModel {
    pub event: String,
    pub date: String,
    pub venue: String,
    pub category: String,
    pub price: String,
    pub organizer: String,
    pub restrictions: String,
    pub status: TicketStatus,
}

impl ProfilePageModel {
    /// Text shown instead of cards, if there are none
    pub fn empty_tickets_message(&self) -> Option<&'static str> {
        self.tickets.is_empty().then_some(NO_TICKETS)
    }
}

impl ContactModel {
    /// Label/value rows in display order
    pub fn rows(&self) -> [(&'static str, &str); 4] {
        [
            ("Phone", self.phone.as_str()),
            ("Last Login", self.last_login.as_str()),
            ("Balance", self.balance.as_str()),
            ("Birth Date", self.birth_date.as_str()),
        ]
    }
}

impl TicketCardModel {
    /// Label/value rows in display order, excluding the status row
    pub fn rows(&self) -> [(&'static str, &str); 7] {
        [
            ("Event", self.event.as_str()),
            ("Date", self.date.as_str()),
            ("Venue", self.venue.as_str()),
            ("Category", self.category.as_str()),
            ("Price", self.price.as_str()),
            ("Organizer", self.organizer.as_str()),
            ("Restrictions", self.restrictions.as_str()),
        ]
    }
}

/// Pure function: format one ticket
pub fn compute_ticket_card(ticket: &TicketRecord) -> TicketCardModel {
    let event = &ticket.event_info;
    let info = &ticket.ticket_info;
    TicketCardModel {
        event: event.event_name.clone(),
        date: event.event_date.clone(),
        venue: format_venue(&event.venue),
        category: info.category_name.clone(),
        price: format_number(info.price),
        organizer: event.organizer_name.clone(),
        restrictions: format_restrictions(&event.restrictions),
        status: TicketStatus::from_event(event),
    }
}

/// Pure function: format a whole profile
pub fn compute_profile_page(record: &ProfileRecord) -> ProfilePageModel {
    let user = &record.user;
    ProfilePageModel {
        full_name: format!("{} {}", user.name, user.surname),
        email: user.email.clone(),
        contact: ContactModel {
            phone: or_not_available(user.phone.as_deref()),
            last_login: or_not_available(user.last_login.as_deref()),
            balance: format_optional_number(user.balance),
            birth_date: or_empty(user.birth_date.as_deref()),
        },
        tickets: record.tickets.iter().map(compute_ticket_card).collect(),
    }
}

/// Pure function: compute view model from state
pub fn compute_profile_view_model(state: &ProfileState) -> ProfileViewModel {
    match state {
        ProfileState::Loading => ProfileViewModel::Loading,
        ProfileState::Error(message) => ProfileViewModel::Error {
            message: message.clone(),
        },
        ProfileState::Ready(record) => ProfileViewModel::Ready(compute_profile_page(record)),
    }
}
