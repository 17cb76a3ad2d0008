//! Window-backed navigation and confirmation

use silvess::client::Navigator;
use silvess::config::ApiConfig;
use silvess::shell::Confirm;

/// Full-page navigation through `window.location`
pub struct LocationNavigator {
    login_path: String,
    dashboard_path: String,
}

impl LocationNavigator {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            login_path: config.login_path.clone(),
            dashboard_path: config.dashboard_path.clone(),
        }
    }

    fn go(&self, path: &str) {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return;
        };
        // A failed login answers 401 too; stay put so the form can show it
        if location.pathname().ok().as_deref() == Some(path) {
            return;
        }
        if let Err(e) = location.set_href(path) {
            tracing::error!(path, error = ?e, "Navigation failed");
        }
    }
}

impl Navigator for LocationNavigator {
    fn to_login(&self) {
        self.go(&self.login_path);
    }

    fn to_dashboard(&self) {
        self.go(&self.dashboard_path);
    }
}

/// `window.confirm`; a blocked dialog counts as "no"
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

/// Host the page was served from, for base URL selection
pub fn current_host() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}
