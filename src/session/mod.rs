//! Session Management
//!
//! The authenticated session is an explicit context object built once and
//! handed to the API client. It is persisted through a [`SessionStorage`]
//! backend (browser `localStorage` in the UI, memory in tests).
//!
//! ## Lifecycle
//!
//! 1. `init()` on load restores whatever the storage holds
//! 2. `establish()` after a successful login writes token and user
//! 3. `teardown()` on logout or an unauthorized response clears both

mod context;
mod store;

pub use context::{Session, SessionContext, User};
pub use store::{MemoryStorage, SessionError, SessionStorage};
