//! Single `Label: value` row

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the LabeledField component
#[derive(Default, Props)]
pub struct LabeledFieldProps {
    pub label: String,
    pub value: String,
    /// Overrides the default text color for the value
    pub value_color: Option<Color>,
}

/// Bold label followed by its value on one row
#[component]
pub fn LabeledField(props: &LabeledFieldProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(flex_direction: FlexDirection::Row, column_gap: 1) {
            Text(
                content: format!("{}:", props.label),
                color: theme.text,
                weight: Weight::Bold,
            )
            Text(
                content: props.value.clone(),
                color: props.value_color.unwrap_or(theme.text),
            )
        }
    }
}
