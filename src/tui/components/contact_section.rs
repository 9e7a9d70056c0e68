//! Contact information block of the profile page

use iocraft::prelude::*;

use super::LabeledField;
use crate::profile::ContactModel;
use crate::tui::theme::theme;

/// Props for the ContactSection component
#[derive(Default, Props)]
pub struct ContactSectionProps {
    pub contact: ContactModel,
}

#[component]
pub fn ContactSection(props: &ContactSectionProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct) {
            Text(
                content: "Contact Information",
                color: theme.heading,
                weight: Weight::Bold,
            )
            #(props.contact.rows().into_iter().map(|(label, value)| element! {
                LabeledField(label: label.to_string(), value: value.to_string())
            }))
        }
    }
}
