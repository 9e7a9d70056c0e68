//! Profile browser (`buyer-profile view`)
//!
//! Fullscreen shell around [`ProfileView`]: a header naming the user being
//! viewed, an optional id prompt, the scrolling profile and a shortcuts bar.

pub mod model;

pub use model::{
    BrowserAction, BrowserState, BrowserViewModel, compute_browser_view_model, key_to_action,
    reduce_browser_state,
};

use iocraft::prelude::*;

use crate::api::ProfileClient;
use crate::profile::ProfileStatus;
use crate::tui::components::{Footer, Header, IdPrompt};
use crate::tui::profile_view::ProfileView;
use crate::tui::theme::theme;

/// Props for the ProfileBrowser component
#[derive(Default, Props)]
pub struct ProfileBrowserProps {
    /// User shown on start
    pub user_id: String,
    pub client: Option<ProfileClient>,
}

/// Main browser component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Header                                    |
/// +------------------------------------------+
/// | IdPrompt (while open)                     |
/// +------------------------------------------+
/// | ProfileView                               |
/// |                                           |
/// +------------------------------------------+
/// | Footer                                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn ProfileBrowser(
    props: &ProfileBrowserProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let initial_user = props.user_id.clone();
    let mut state: State<BrowserState> = hooks.use_state(move || BrowserState::new(initial_user));
    let mut draft = hooks.use_state(String::new);
    let status: State<ProfileStatus> = hooks.use_state(ProfileStatus::default);

    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let prompt_open = state.read().prompt_open;
                let Some(action) = key_to_action(code, modifiers, prompt_open) else {
                    return;
                };
                let action = match action {
                    BrowserAction::SubmitPrompt(_) => {
                        BrowserAction::SubmitPrompt(draft.to_string())
                    }
                    BrowserAction::OpenPrompt => {
                        draft.set(String::new());
                        BrowserAction::OpenPrompt
                    }
                    other => other,
                };
                let ticket_count = match status.get() {
                    ProfileStatus::Ready { tickets } => tickets,
                    _ => 0,
                };
                let current = state.read().clone();
                state.set(reduce_browser_state(current, action, ticket_count));
            }
            _ => {}
        }
    });

    let current = state.read().clone();

    // Exit if requested
    if current.should_exit {
        system.exit();
    }

    let view_model = compute_browser_view_model(&current, status.get());

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                subtitle: Some(view_model.subtitle.clone()),
                hint: Some(view_model.hint.clone()),
            )

            #(current.prompt_open.then(|| element! {
                View(width: 100pct, padding_left: 1, padding_right: 1) {
                    IdPrompt(value: Some(draft), has_focus: true)
                }
            }))

            View(
                flex_grow: 1.0,
                width: 100pct,
                overflow: Overflow::Hidden,
            ) {
                ProfileView(
                    user_id: current.user_id.clone(),
                    client: props.client.clone(),
                    reload: current.reload,
                    scroll_offset: current.scroll_offset,
                    on_status: Some(status),
                )
            }

            Footer(shortcuts: view_model.shortcuts.clone())
        }
    }
}
