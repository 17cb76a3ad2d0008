//! Browser Bindings
//!
//! Wires the `silvess` client to the browser: `fetch` transport,
//! `localStorage` session, `window.location` navigation and
//! `window.confirm` prompts.

mod browser;
mod fetch;
mod storage;

pub use browser::{current_host, BrowserConfirm, LocationNavigator};
pub use fetch::FetchTransport;
pub use storage::LocalStorage;

use std::rc::Rc;

use silvess::session::{MemoryStorage, SessionContext, SessionStorage};
use silvess::shell::{Confirm, PageLoads};
use silvess::{ApiClient, Config, Formatter};

const EMBEDDED_CONFIG: &str = include_str!("../../silvess.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load_config() -> Config {
    match Config::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("Using default config: {}", e).into());
            Config::default()
        }
    }
}

/// Stored override first, then the host-based choice
pub fn resolve_base_url(config: &Config, storage: &dyn SessionStorage, host: &str) -> String {
    match storage.get(&config.session.api_url_key) {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => config.api.base_url_for_host(host),
    }
}

/// Everything a page needs to talk to the backend
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<Config>,
    pub client: ApiClient,
    pub fmt: Rc<Formatter>,
    pub loads: PageLoads,
    pub confirm: Rc<dyn Confirm>,
}

impl AppContext {
    pub fn build(config: Config) -> Self {
        let storage: Rc<dyn SessionStorage> = match LocalStorage::open() {
            Some(storage) => Rc::new(storage),
            None => {
                tracing::warn!("localStorage unavailable, session will not persist");
                Rc::new(MemoryStorage::default())
            }
        };

        let base_url = resolve_base_url(&config, storage.as_ref(), &current_host());
        let session = SessionContext::new(storage, &config.session);
        let client = ApiClient::new(
            base_url,
            Rc::new(FetchTransport),
            session,
            Rc::new(LocationNavigator::new(&config.api)),
        );

        Self {
            fmt: Rc::new(Formatter::new(&config.locale)),
            config: Rc::new(config),
            client,
            loads: PageLoads::new(),
            confirm: Rc::new(BrowserConfirm),
        }
    }
}
