//! Plain-text profile rendering for non-interactive output

use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::profile::{
    ProfilePageModel, ProfileState, ProfileViewModel, StatusTone, TicketCardModel,
    compute_profile_view_model,
};

/// Render a profile state as terminal text.
///
/// Produces the same lines as the interactive page. When `colored` is false
/// the output carries no escape codes.
pub fn render_profile_text(state: &ProfileState, colored: bool) -> String {
    match compute_profile_view_model(state) {
        ProfileViewModel::Loading => "Loading...".to_string(),
        ProfileViewModel::Error { message } => {
            let line = format!("Error: {}", message);
            if colored {
                line.red().to_string()
            } else {
                line
            }
        }
        ProfileViewModel::Ready(page) => render_page(&page, colored),
    }
}

fn heading(text: &str, colored: bool) -> String {
    if colored {
        text.cyan().bold().to_string()
    } else {
        text.to_string()
    }
}

fn render_page(page: &ProfilePageModel, colored: bool) -> String {
    let mut out = String::new();

    let name = if colored {
        page.full_name.bold().to_string()
    } else {
        page.full_name.clone()
    };
    let email = if colored {
        page.email.dimmed().to_string()
    } else {
        page.email.clone()
    };
    let _ = writeln!(out, "{}", name);
    let _ = writeln!(out, "{}", email);
    out.push('\n');

    let _ = writeln!(out, "{}", heading("Contact Information", colored));
    for (label, value) in page.contact.rows() {
        let _ = writeln!(out, "  {}: {}", label, value);
    }
    out.push('\n');

    let _ = writeln!(out, "{}", heading("Purchased Tickets", colored));
    if let Some(message) = page.empty_tickets_message() {
        let _ = writeln!(out, "  {}", message);
    }
    for (i, card) in page.tickets.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_card(&mut out, card, colored);
    }

    out.trim_end().to_string()
}

fn render_card(out: &mut String, card: &TicketCardModel, colored: bool) {
    for (label, value) in card.rows() {
        let _ = writeln!(out, "  {}: {}", label, value);
    }
    let label = card.status.label();
    let status = match (colored, card.status.tone()) {
        (false, _) => label.to_string(),
        (true, StatusTone::Alert) => label.red().to_string(),
        (true, StatusTone::Ok) => label.green().to_string(),
    };
    let _ = writeln!(out, "  Status: {}", status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        EventInfo, ProfileRecord, RestrictionInfo, TicketInfo, TicketRecord, UserInfo, VenueInfo,
    };

    fn ann_lee(tickets: Vec<TicketRecord>) -> ProfileRecord {
        ProfileRecord {
            user: UserInfo {
                name: "Ann".to_string(),
                surname: "Lee".to_string(),
                email: "a@x.com".to_string(),
                phone: None,
                last_login: None,
                birth_date: Some("1990-01-01".to_string()),
                balance: Some(10.0),
            },
            tickets,
        }
    }

    fn ticket(is_done: bool, is_cancelled: bool) -> TicketRecord {
        TicketRecord {
            event_info: EventInfo {
                event_name: "Jazz Night".to_string(),
                event_date: "2024-05-01".to_string(),
                organizer_name: "Blue Org".to_string(),
                venue: VenueInfo {
                    name: "Hall".to_string(),
                    city: "Izmir".to_string(),
                    state: "TR".to_string(),
                    street: "Kordon 1".to_string(),
                },
                restrictions: RestrictionInfo {
                    alcohol: false,
                    smoke: true,
                    age: 18.0,
                    max_ticket: 4.0,
                },
                is_done,
                is_cancelled,
            },
            ticket_info: TicketInfo {
                category_name: "Balcony".to_string(),
                price: 42.5,
                seat_number: Some("B12".to_string()),
            },
        }
    }

    #[test]
    fn test_render_loading_and_error() {
        assert_eq!(
            render_profile_text(&ProfileState::Loading, false),
            "Loading..."
        );
        assert_eq!(
            render_profile_text(
                &ProfileState::Error("Request failed with status code 500".to_string()),
                false
            ),
            "Error: Request failed with status code 500"
        );
    }

    #[test]
    fn test_render_profile_without_tickets() {
        let text = render_profile_text(&ProfileState::Ready(ann_lee(vec![])), false);
        insta::assert_snapshot!(text, @r"
        Ann Lee
        a@x.com

        Contact Information
          Phone: N/A
          Last Login: N/A
          Balance: 10
          Birth Date: 1990-01-01

        Purchased Tickets
          No tickets purchased.
        ");
    }

    #[test]
    fn test_render_ticket_card() {
        let state = ProfileState::Ready(ann_lee(vec![ticket(false, false)]));
        let text = render_profile_text(&state, false);
        insta::assert_snapshot!(text, @r"
        Ann Lee
        a@x.com

        Contact Information
          Phone: N/A
          Last Login: N/A
          Balance: 10
          Birth Date: 1990-01-01

        Purchased Tickets
          Event: Jazz Night
          Date: 2024-05-01
          Venue: Hall, Izmir, TR, Kordon 1
          Category: Balcony
          Price: 42.5
          Organizer: Blue Org
          Restrictions: No alcohol, Smoking allowed, Age limit: 18, Max tickets: 4
          Status: Upcoming
        ");
        assert!(!text.contains("B12"));
    }

    #[test]
    fn test_uncolored_output_has_no_escape_codes() {
        let text = render_profile_text(
            &ProfileState::Ready(ann_lee(vec![ticket(true, true)])),
            false,
        );
        assert!(!text.contains('\u{1b}'));
        assert!(text.contains("Status: Done"));
    }

    #[test]
    fn test_colored_output_marks_status() {
        let text = render_profile_text(
            &ProfileState::Ready(ann_lee(vec![ticket(false, true)])),
            true,
        );
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("Cancelled"));
    }
}
