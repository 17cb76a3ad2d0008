//! # SILVESS
//!
//! Restaurant management dashboard core: inventory, recipe costing, menus,
//! table QR codes and sales reporting, as seen from the admin client.
//!
//! ## Modules
//!
//! - [`client`]: Request wrapper over a pluggable HTTP transport, with bearer
//!   auth and the unauthorized-redirect rule
//! - [`services`]: One service object per backend resource
//! - [`session`]: Session context with explicit init/establish/teardown
//! - [`models`]: Typed records for every backend resource
//! - [`shell`]: Dashboard router, page loads, notices and view models
//! - [`format`]: Locale-aware currency and date formatting
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: `tracing` subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use silvess::client::{ApiClient, Navigator, ReqwestTransport};
//! use silvess::session::{MemoryStorage, SessionContext};
//! use silvess::Config;
//! use std::rc::Rc;
//!
//! struct Stay;
//! impl Navigator for Stay {
//!     fn to_login(&self) {}
//!     fn to_dashboard(&self) {}
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let session = SessionContext::new(Rc::new(MemoryStorage::default()), &config.session);
//!     let client = ApiClient::new(
//!         config.api.base_url_for_host("localhost"),
//!         Rc::new(ReqwestTransport::new()),
//!         session,
//!         Rc::new(Stay),
//!     );
//!
//!     let auth = client.auth().login("admin@silvess.com", "admin123").await?;
//!     client.session().establish(&auth.into_session())?;
//!
//!     let ingredients = client.ingredients().list(&Default::default()).await?;
//!     println!("{} ingredients", ingredients.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod format;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod shell;

pub use client::{ApiClient, ClientError, ClientResult, Navigator, Transport};
pub use config::{Config, ConfigError};
pub use format::Formatter;
pub use session::{Session, SessionContext, SessionError, SessionStorage, User};
pub use shell::{Page, Router};
