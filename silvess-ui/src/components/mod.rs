//! UI Components
//!
//! Reusable Leptos components for the dashboard shell.

pub mod field;
pub mod header;
pub mod loading;
pub mod sidebar;
pub mod stat_card;
pub mod toast;

pub use field::TextField;
pub use header::Header;
pub use loading::{Empty, Loading};
pub use sidebar::Sidebar;
pub use stat_card::StatCards;
pub use toast::Toast;
