//! Ticket card component
//!
//! One bordered card per purchased ticket showing event, venue, price and
//! restrictions, with a colored status row at the bottom.

use iocraft::prelude::*;

use super::LabeledField;
use crate::profile::TicketCardModel;
use crate::tui::theme::theme;

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    /// The formatted ticket to display
    pub card: Option<TicketCardModel>,
}

/// Bordered ticket card
///
/// Layout:
/// ```text
/// +--------------------------------------------+
/// | Event: Summer Fest                         |
/// | Date: 2024-07-01                           |
/// | Venue: Arena, Austin, TX, 1 Main St        |
/// | Category: VIP                              |
/// | Price: 150                                 |
/// | Organizer: Live Org                        |
/// | Restrictions: No alcohol, No smoking, ...  |
/// | Status: Upcoming                           |
/// +--------------------------------------------+
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(card) = props.card.as_ref() else {
        return element! {
            View(border_style: BorderStyle::Round, border_color: theme.border) {
                Text(content: "No ticket provided", color: theme.text_dimmed)
            }
        };
    };

    let status_color = theme.tone_color(card.status.tone());

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            #(card.rows().into_iter().map(|(label, value)| element! {
                LabeledField(label: label.to_string(), value: value.to_string())
            }))
            LabeledField(
                label: "Status".to_string(),
                value: card.status.label().to_string(),
                value_color: Some(status_color),
            )
        }
    }
}
