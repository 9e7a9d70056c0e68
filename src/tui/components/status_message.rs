//! Loading and error placeholders
//!
//! Shown in place of the profile while no data is available.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Which placeholder to display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusKind {
    /// Fetch in flight
    #[default]
    Loading,
    /// Fetch failed with the given message
    Error(String),
}

impl StatusKind {
    /// The single line of text the placeholder shows
    pub fn message(&self) -> String {
        match self {
            StatusKind::Loading => "Loading...".to_string(),
            StatusKind::Error(message) => format!("Error: {}", message),
        }
    }
}

/// Props for the StatusMessage component
#[derive(Default, Props)]
pub struct StatusMessageProps {
    pub kind: StatusKind,
}

/// Centered placeholder with an icon box
#[component]
pub fn StatusMessage(props: &StatusMessageProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let is_error = matches!(props.kind, StatusKind::Error(_));
    let (icon, accent) = if is_error {
        ("!", theme.error)
    } else {
        ("~", theme.text_dimmed)
    };

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: if is_error { theme.error } else { theme.border },
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: accent,
                    weight: Weight::Bold,
                )
            }

            Text(
                content: props.kind.message(),
                color: if is_error { theme.error } else { theme.text },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_kind_default() {
        assert_eq!(StatusKind::default(), StatusKind::Loading);
    }

    #[test]
    fn test_messages() {
        assert_eq!(StatusKind::Loading.message(), "Loading...");
        assert_eq!(
            StatusKind::Error("Network Error".to_string()).message(),
            "Error: Network Error"
        );
    }
}
