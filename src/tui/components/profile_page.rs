//! Presentational profile page
//!
//! Renders a [`ProfileViewModel`]: the loading or error placeholder, or the
//! full profile with contact details and ticket cards. Holds no state of
//! its own so it can be rendered to a string in tests.

use iocraft::prelude::*;

use super::{ContactSection, StatusKind, StatusMessage, TicketCard};
use crate::profile::{ProfilePageModel, ProfileViewModel};
use crate::tui::theme::theme;

/// Props for the ProfilePage component
#[derive(Default, Props)]
pub struct ProfilePageProps {
    pub model: ProfileViewModel,
    /// Number of leading ticket cards scrolled out of view
    pub scroll_offset: usize,
}

#[component]
pub fn ProfilePage(props: &ProfilePageProps) -> impl Into<AnyElement<'static>> {
    let page: AnyElement<'static> = match &props.model {
        ProfileViewModel::Loading => element! {
            StatusMessage(kind: StatusKind::Loading)
        }
        .into(),
        ProfileViewModel::Error { message } => element! {
            StatusMessage(kind: StatusKind::Error(message.clone()))
        }
        .into(),
        ProfileViewModel::Ready(page) => render_ready(page, props.scroll_offset),
    };
    page
}

fn render_ready(page: &ProfilePageModel, scroll_offset: usize) -> AnyElement<'static> {
    let theme = theme();
    let hidden = scroll_offset.min(page.tickets.len());

    let ready = element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            padding_left: 1,
            padding_right: 1,
        ) {
            // Name and email
            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                Text(
                    content: page.full_name.clone(),
                    color: theme.text,
                    weight: Weight::Bold,
                )
                Text(
                    content: page.email.clone(),
                    color: theme.text_dimmed,
                )
            }

            ContactSection(contact: page.contact.clone())

            View(flex_direction: FlexDirection::Column, margin_top: 1, width: 100pct) {
                Text(
                    content: "Purchased Tickets",
                    color: theme.heading,
                    weight: Weight::Bold,
                )
                #(page.empty_tickets_message().map(|message| element! {
                    Text(content: message, color: theme.text)
                }))
                #(if hidden > 0 {
                    Some(element! {
                        Text(
                            content: format!("({} more above)", hidden),
                            color: theme.text_dimmed,
                        )
                    })
                } else {
                    None
                })
                #(page.tickets.iter().skip(hidden).map(|card| element! {
                    TicketCard(card: Some(card.clone()))
                }))
            }
        }
    };
    ready.into()
}
