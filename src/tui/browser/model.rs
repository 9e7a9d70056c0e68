//! ProfileBrowser model types for testable state management
//!
//! This module separates the shell's state (BrowserState) from its key
//! bindings and rendering so both can be tested without iocraft running.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::api::validate_user_id;
use crate::profile::ProfileStatus;
use crate::tui::components::footer::Shortcut;
use crate::tui::components::{profile_shortcuts, prompt_shortcuts};

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    /// User whose profile is shown
    pub user_id: String,
    /// Whether the user id prompt has focus
    pub prompt_open: bool,
    /// Bumped to refetch the current user
    pub reload: u64,
    /// Number of ticket cards scrolled out of view
    pub scroll_offset: usize,
    /// Set once the user asked to leave
    pub should_exit: bool,
}

/// All possible actions in the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    ScrollDown,
    ScrollUp,
    ScrollTop,
    ScrollBottom,
    Reload,
    OpenPrompt,
    /// Commit the typed identifier
    SubmitPrompt(String),
    CancelPrompt,
    Quit,
}

impl BrowserState {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }
}

/// Convert a key event to a BrowserAction (pure function)
///
/// While the prompt is open only Enter, Esc and Ctrl+C are claimed; other
/// keys go to the text input. `SubmitPrompt` carries an empty string here;
/// the caller fills in the typed text.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    prompt_open: bool,
) -> Option<BrowserAction> {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(BrowserAction::Quit);
    }

    if prompt_open {
        return match code {
            KeyCode::Enter => Some(BrowserAction::SubmitPrompt(String::new())),
            KeyCode::Esc => Some(BrowserAction::CancelPrompt),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(BrowserAction::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BrowserAction::ScrollUp),
        KeyCode::Char('g') | KeyCode::Home => Some(BrowserAction::ScrollTop),
        KeyCode::Char('G') | KeyCode::End => Some(BrowserAction::ScrollBottom),
        KeyCode::Char('r') => Some(BrowserAction::Reload),
        KeyCode::Char('/') => Some(BrowserAction::OpenPrompt),
        KeyCode::Char('q') | KeyCode::Esc => Some(BrowserAction::Quit),
        _ => None,
    }
}

/// Pure function: apply an action to the browser state.
///
/// `ticket_count` bounds scrolling so the last card always stays visible.
pub fn reduce_browser_state(
    mut state: BrowserState,
    action: BrowserAction,
    ticket_count: usize,
) -> BrowserState {
    let max_offset = ticket_count.saturating_sub(1);
    match action {
        BrowserAction::ScrollDown => {
            state.scroll_offset = (state.scroll_offset + 1).min(max_offset);
        }
        BrowserAction::ScrollUp => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
        }
        BrowserAction::ScrollTop => state.scroll_offset = 0,
        BrowserAction::ScrollBottom => state.scroll_offset = max_offset,
        BrowserAction::Reload => {
            state.reload += 1;
            state.scroll_offset = 0;
        }
        BrowserAction::OpenPrompt => state.prompt_open = true,
        BrowserAction::SubmitPrompt(text) => match validate_user_id(&text) {
            Ok(id) if id == state.user_id => {
                state.prompt_open = false;
                state.reload += 1;
                state.scroll_offset = 0;
            }
            Ok(id) => {
                state.user_id = id.to_string();
                state.prompt_open = false;
                state.scroll_offset = 0;
            }
            // Blank input keeps the prompt open
            Err(_) => {}
        },
        BrowserAction::CancelPrompt => state.prompt_open = false,
        BrowserAction::Quit => state.should_exit = true,
    }
    state
}

/// Computed view model for the browser chrome
#[derive(Debug, Clone)]
pub struct BrowserViewModel {
    pub subtitle: String,
    pub hint: String,
    pub shortcuts: Vec<Shortcut>,
}

/// Pure function: compute header and footer content
pub fn compute_browser_view_model(
    state: &BrowserState,
    status: ProfileStatus,
) -> BrowserViewModel {
    BrowserViewModel {
        subtitle: format!("#{}", state.user_id),
        hint: status.hint(),
        shortcuts: if state.prompt_open {
            prompt_shortcuts()
        } else {
            profile_shortcuts()
        },
    }
}
