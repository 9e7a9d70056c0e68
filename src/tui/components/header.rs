//! App header bar component
//!
//! Displays the application title, the identifier being viewed, and an
//! optional status hint on the right.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Title (defaults to "Buyer Profile")
    pub title: Option<String>,

    /// Subtitle, typically the user identifier
    pub subtitle: Option<String>,

    /// Right-aligned hint (e.g. "loading")
    pub hint: Option<String>,
}

/// Build the left side of the header: title and optional subtitle
pub fn header_text(title: Option<&str>, subtitle: Option<&str>) -> String {
    let title = title.unwrap_or("Buyer Profile");
    match subtitle {
        Some(sub) if !sub.is_empty() => format!("{} - {}", title, sub),
        _ => title.to_string(),
    }
}

/// App header bar
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let left_text = header_text(props.title.as_deref(), props.subtitle.as_deref());

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: left_text,
                color: theme.highlight_text,
                weight: Weight::Bold,
            )
            #(props.hint.clone().map(|hint| element! {
                Text(
                    content: hint,
                    color: theme.highlight_text,
                )
            }))
        }
    }
}
