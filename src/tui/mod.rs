//! TUI module for the interactive profile screen
//!
//! - `browser` - fullscreen shell with id prompt and shortcuts
//! - `profile_view` - stateful view that fetches and renders one profile
//! - `components` - presentational building blocks

pub mod browser;
pub mod components;
pub mod profile_view;
pub mod theme;

pub use browser::{ProfileBrowser, ProfileBrowserProps};
pub use components::{ProfilePage, ProfilePageProps};
pub use profile_view::{ProfileView, ProfileViewProps};
pub use theme::Theme;
