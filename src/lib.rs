pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod paths;
pub mod profile;
pub mod tui;
pub mod types;

pub use api::{ProfileClient, ProfileSource, validate_user_id};
pub use config::Config;
pub use display::render_profile_text;
pub use error::{ProfileError, Result};
pub use profile::{ProfileSlot, ProfileState, load_profile_state, reduce_profile_slot};
pub use types::{
    EventInfo, ProfileRecord, RestrictionInfo, TicketInfo, TicketRecord, UserInfo, VenueInfo,
};
