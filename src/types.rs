//! Profile payload types returned by the buyer profile endpoint.
//!
//! Field names mirror the JSON keys sent by the backend. Unknown keys are
//! ignored so that additive backend changes don't break rendering.

use serde::{Deserialize, Serialize};

/// Combined user record and ticket purchase history for one buyer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user: UserInfo,
    /// Purchased tickets in the order the server returned them
    pub tickets: Vec<TicketRecord>,
}

/// Contact details of the buyer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

/// A single purchased ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRecord {
    pub event_info: EventInfo,
    pub ticket_info: TicketInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInfo {
    pub event_name: String,
    pub event_date: String,
    pub organizer_name: String,
    pub venue: VenueInfo,
    pub restrictions: RestrictionInfo,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub is_cancelled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueInfo {
    pub name: String,
    pub city: String,
    pub state: String,
    pub street: String,
}

/// Event-level policy flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestrictionInfo {
    pub alcohol: bool,
    pub smoke: bool,
    pub age: f64,
    pub max_ticket: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketInfo {
    pub category_name: String,
    pub price: f64,
    /// Carried for completeness; never rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
}
