//! Global Application State
//!
//! Reactive wrappers around the `silvess` shell state.

use leptos::*;
use silvess::shell::{Navigation, Notices, Page, Router, StatsSummary, UserBadge};
use silvess::ClientError;

use crate::api::AppContext;

/// Global application state provided to all dashboard components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Active page and sidebar
    pub router: RwSignal<Router>,
    /// Bumped on every navigation, reselecting included
    pub visit: RwSignal<u64>,
    /// Visible alert banners
    pub notices: RwSignal<Notices>,
    /// Header stat cards
    pub stats: RwSignal<StatsSummary>,
    pub user: RwSignal<Option<UserBadge>>,
    /// Stats refresh in flight
    pub refreshing: RwSignal<bool>,
    notice_timeout_ms: u32,
}

/// Provide global state to the component tree
pub fn provide_global_state(ctx: &AppContext) -> GlobalState {
    let user = ctx.client.session().user().map(|u| UserBadge::new(&u));

    let state = GlobalState {
        router: create_rw_signal(Router::new(&ctx.config.ui)),
        visit: create_rw_signal(0),
        notices: create_rw_signal(Notices::new()),
        stats: create_rw_signal(StatsSummary::placeholder()),
        user: create_rw_signal(user),
        refreshing: create_rw_signal(false),
        notice_timeout_ms: ctx.config.ui.notice_timeout_ms,
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Switch pages; the previous view's in-flight loads are abandoned
    pub fn navigate(&self, ctx: &AppContext, page: Page) -> Navigation {
        let mut nav = Navigation { from: page, to: page };
        self.router.update(|r| nav = r.navigate(page));
        ctx.loads.cancel_all();
        if nav.is_reload() {
            tracing::debug!(%page, "Reloading page");
        }
        self.visit.update(|v| *v += 1);
        nav
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        let mut id = 0;
        self.notices.update(|n| id = n.success(message));
        self.expire(id);
    }

    /// Show a failed call; cancelled loads stay silent
    pub fn show_error(&self, error: &ClientError) {
        if error.is_cancelled() {
            return;
        }
        tracing::warn!(%error, "Request failed");
        let mut id = None;
        self.notices.update(|n| id = n.error(error));
        if let Some(id) = id {
            self.expire(id);
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|n| {
            n.dismiss(id);
        });
    }

    fn expire(&self, id: u64) {
        let notices = self.notices;
        gloo_timers::callback::Timeout::new(self.notice_timeout_ms, move || {
            notices.update(|n| {
                n.dismiss(id);
            });
        })
        .forget();
    }
}
