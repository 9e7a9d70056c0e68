//! Display rules for profile fields.
//!
//! Only phone and last login fall back to "N/A"; balance and birth date
//! render empty when absent.

use crate::types::{EventInfo, RestrictionInfo, VenueInfo};

/// Placeholder for missing contact fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Text shown in place of ticket cards when nothing was purchased
pub const NO_TICKETS: &str = "No tickets purchased.";

/// Lifecycle label of a purchased ticket's event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Done,
    Cancelled,
    Upcoming,
}

/// Presentation hint for a status label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Rendered red
    Alert,
    /// Rendered green
    Ok,
}

impl TicketStatus {
    /// `is_done` takes priority over `is_cancelled`
    pub fn from_event(event: &EventInfo) -> Self {
        if event.is_done {
            TicketStatus::Done
        } else if event.is_cancelled {
            TicketStatus::Cancelled
        } else {
            TicketStatus::Upcoming
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Done => "Done",
            TicketStatus::Cancelled => "Cancelled",
            TicketStatus::Upcoming => "Upcoming",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            TicketStatus::Done | TicketStatus::Cancelled => StatusTone::Alert,
            TicketStatus::Upcoming => StatusTone::Ok,
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Value or "N/A" when absent or empty
pub fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Value or an empty string when absent
pub fn or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Format a number the way the backend's web client shows it:
/// integral values without a fraction, everything else shortest round-trip.
///
/// Magnitudes of 1e21 and above or below 1e-6 switch to exponent form
/// with an explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Also folds -0 into 0
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude.is_finite() && (magnitude >= 1e21 || magnitude < 1e-6) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }
    value.to_string()
}

/// Optional number, empty when absent
pub fn format_optional_number(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

/// `name, city, state, street`
pub fn format_venue(venue: &VenueInfo) -> String {
    format!(
        "{}, {}, {}, {}",
        venue.name, venue.city, venue.state, venue.street
    )
}

/// Alcohol, smoking, age limit and ticket cap on one line
pub fn format_restrictions(restrictions: &RestrictionInfo) -> String {
    let alcohol = if restrictions.alcohol {
        "Alcohol allowed"
    } else {
        "No alcohol"
    };
    let smoke = if restrictions.smoke {
        "Smoking allowed"
    } else {
        "No smoking"
    };
    format!(
        "{}, {}, Age limit: {}, Max tickets: {}",
        alcohol,
        smoke,
        format_number(restrictions.age),
        format_number(restrictions.max_ticket)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(is_done: bool, is_cancelled: bool) -> EventInfo {
        EventInfo {
            event_name: "Concert".to_string(),
            event_date: "2024-06-01".to_string(),
            organizer_name: "Org".to_string(),
            venue: VenueInfo::default(),
            restrictions: RestrictionInfo::default(),
            is_done,
            is_cancelled,
        }
    }

    #[test]
    fn test_status_priority() {
        assert_eq!(TicketStatus::from_event(&event(true, true)), TicketStatus::Done);
        assert_eq!(TicketStatus::from_event(&event(true, false)), TicketStatus::Done);
        assert_eq!(
            TicketStatus::from_event(&event(false, true)),
            TicketStatus::Cancelled
        );
        assert_eq!(
            TicketStatus::from_event(&event(false, false)),
            TicketStatus::Upcoming
        );
    }

    #[test]
    fn test_status_tone() {
        assert_eq!(TicketStatus::Done.tone(), StatusTone::Alert);
        assert_eq!(TicketStatus::Cancelled.tone(), StatusTone::Alert);
        assert_eq!(TicketStatus::Upcoming.tone(), StatusTone::Ok);
        assert_eq!(TicketStatus::Cancelled.to_string(), "Cancelled");
    }

    #[test]
    fn test_fallbacks_are_asymmetric() {
        assert_eq!(or_not_available(None), "N/A");
        assert_eq!(or_not_available(Some("")), "N/A");
        assert_eq!(or_not_available(Some("555-0100")), "555-0100");
        assert_eq!(or_empty(None), "");
        assert_eq!(or_empty(Some("1990-01-01")), "1990-01-01");
        assert_eq!(format_optional_number(None), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-3.25), "-3.25");
        assert_eq!(format_optional_number(Some(0.1)), "0.1");
    }

    #[test]
    fn test_format_number_exponent_range() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(-2e21), "-2e+21");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_venue() {
        let venue = VenueInfo {
            name: "Arena".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            street: "1 Main St".to_string(),
        };
        insta::assert_snapshot!(format_venue(&venue), @"Arena, Austin, TX, 1 Main St");
    }

    #[test]
    fn test_format_restrictions() {
        let lenient = RestrictionInfo {
            alcohol: true,
            smoke: true,
            age: 0.0,
            max_ticket: 10.0,
        };
        insta::assert_snapshot!(
            format_restrictions(&lenient),
            @"Alcohol allowed, Smoking allowed, Age limit: 0, Max tickets: 10"
        );

        let strict = RestrictionInfo {
            alcohol: false,
            smoke: false,
            age: 18.0,
            max_ticket: 2.0,
        };
        insta::assert_snapshot!(
            format_restrictions(&strict),
            @"No alcohol, No smoking, Age limit: 18, Max tickets: 2"
        );
    }
}
