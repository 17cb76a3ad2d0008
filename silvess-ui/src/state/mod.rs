//! State Management
//!
//! Global dashboard state and helpers for spawning backend calls.

pub mod actions;
pub mod global;

pub use actions::{confirm_submit, load, load_latest, refresh_stats, submit};
pub use global::{provide_global_state, GlobalState};
