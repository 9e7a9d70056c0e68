//! Shared TUI components
//!
//! This module contains the building blocks of the profile screen.

pub mod contact_section;
pub mod footer;
pub mod header;
pub mod id_prompt;
pub mod labeled_field;
pub mod profile_page;
pub mod shortcuts;
pub mod status_message;
pub mod ticket_card;

pub use contact_section::{ContactSection, ContactSectionProps};
pub use footer::{Footer, FooterProps, Shortcut, profile_shortcuts, prompt_shortcuts};
pub use header::{Header, HeaderProps};
pub use id_prompt::{IdPrompt, IdPromptProps};
pub use labeled_field::{LabeledField, LabeledFieldProps};
pub use profile_page::{ProfilePage, ProfilePageProps};
pub use status_message::{StatusKind, StatusMessage, StatusMessageProps};
pub use ticket_card::{TicketCard, TicketCardProps};
