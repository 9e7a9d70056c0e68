//! User identifier input
//!
//! A text input with a `#` prefix used to switch the profile being viewed.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the IdPrompt component
#[derive(Default, Props)]
pub struct IdPromptProps {
    /// State for the identifier being typed
    pub value: Option<State<String>>,
    /// Whether the prompt has focus
    pub has_focus: bool,
}

#[component]
pub fn IdPrompt(props: &IdPromptProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let Some(mut value) = props.value else {
        return element! {
            View(
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
                height: 3,
            ) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
        ) {
            View(
                margin_right: 1,
                justify_content: JustifyContent::Center,
            ) {
                Text(
                    content: "User ID #",
                    color: theme.text_dimmed,
                )
            }
            View(flex_grow: 1.0) {
                TextInput(
                    value: value.to_string(),
                    has_focus: props.has_focus,
                    on_change: move |new_value| value.set(new_value),
                    color: theme.text,
                )
            }
        }
    }
}
