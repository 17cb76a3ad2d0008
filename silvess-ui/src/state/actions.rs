//! Spawning backend calls from event handlers

use std::future::Future;

use leptos::*;
use silvess::shell::{confirm_then, Destructive, StatsSummary};
use silvess::{ApiClient, ClientResult};

use super::global::GlobalState;
use crate::api::AppContext;

/// Page data load, cancelled when the user navigates away
///
/// On failure the previous content stays in place and a notice is shown.
pub fn load<T, F, Fut, K>(ctx: &AppContext, state: GlobalState, fetch: F, on_ok: K)
where
    T: 'static,
    F: FnOnce(ApiClient) -> Fut,
    Fut: Future<Output = ClientResult<T>> + 'static,
    K: FnOnce(T) + 'static,
{
    let pending = ctx.loads.track(fetch(ctx.client.clone()));
    settle(pending, state, on_ok);
}

/// Page data load that replaces any earlier one still running under `key`
pub fn load_latest<T, F, Fut, K>(
    ctx: &AppContext,
    state: GlobalState,
    key: &'static str,
    fetch: F,
    on_ok: K,
) where
    T: 'static,
    F: FnOnce(ApiClient) -> Fut,
    Fut: Future<Output = ClientResult<T>> + 'static,
    K: FnOnce(T) + 'static,
{
    let pending = ctx.loads.track_latest(key, fetch(ctx.client.clone()));
    settle(pending, state, on_ok);
}

fn settle<T, P, K>(pending: P, state: GlobalState, on_ok: K)
where
    T: 'static,
    P: Future<Output = ClientResult<T>> + 'static,
    K: FnOnce(T) + 'static,
{
    spawn_local(async move {
        match pending.await {
            Ok(value) => on_ok(value),
            Err(e) => state.show_error(&e),
        }
    });
}

/// User-initiated write; runs to completion even across navigation
pub fn submit<T, F, Fut, K>(ctx: &AppContext, state: GlobalState, send: F, on_ok: K)
where
    T: 'static,
    F: FnOnce(ApiClient) -> Fut,
    Fut: Future<Output = ClientResult<T>> + 'static,
    K: FnOnce(T) + 'static,
{
    let pending = send(ctx.client.clone());
    spawn_local(async move {
        match pending.await {
            Ok(value) => on_ok(value),
            Err(e) => state.show_error(&e),
        }
    });
}

/// Write gated by a confirmation prompt; declining sends nothing
pub fn confirm_submit<T, F, Fut, K>(
    ctx: &AppContext,
    state: GlobalState,
    action: Destructive,
    send: F,
    on_ok: K,
) where
    T: 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = ClientResult<T>> + 'static,
    K: FnOnce(T) + 'static,
{
    let confirm = ctx.confirm.clone();
    let client = ctx.client.clone();
    spawn_local(async move {
        match confirm_then(confirm.as_ref(), action, || send(client)).await {
            None => {}
            Some(Ok(value)) => on_ok(value),
            Some(Err(e)) => state.show_error(&e),
        }
    });
}

/// Reload the header stat cards
pub fn refresh_stats(ctx: &AppContext, state: GlobalState, announce: bool) {
    let fmt = ctx.fmt.clone();
    state.refreshing.set(true);
    let client = ctx.client.clone();
    spawn_local(async move {
        match client.dashboard().stats().await {
            Ok(stats) => {
                state.stats.set(StatsSummary::new(&stats, &fmt));
                if announce {
                    state.show_success("Dados atualizados!");
                }
            }
            Err(e) => state.show_error(&e),
        }
        state.refreshing.set(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::provide_global_state;
    use silvess::{ClientError, Config};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_newer_search_replaces_pending_one() {
        let ctx = AppContext::build(Config::default());
        let state = provide_global_state(&ctx);

        for term in ["a", "ar", "arroz"] {
            load_latest(
                &ctx,
                state,
                "ingredients",
                move |_| std::future::pending::<ClientResult<&'static str>>(),
                move |_| panic!("search for {term} must stay pending"),
            );
        }
        assert_eq!(ctx.loads.tracked(), 1);

        assert_eq!(ctx.loads.cancel_all(), 1);
        assert_eq!(ctx.loads.tracked(), 0);
    }

    #[wasm_bindgen_test]
    fn test_cancelled_errors_stay_silent() {
        let ctx = AppContext::build(Config::default());
        let state = provide_global_state(&ctx);

        state.show_error(&ClientError::Cancelled);
        assert!(state.notices.with_untracked(|n| n.is_empty()));

        state.show_error(&ClientError::Api {
            status: 500,
            message: "Erro interno".to_string(),
        });
        assert_eq!(state.notices.with_untracked(|n| n.items().len()), 1);
    }

    #[wasm_bindgen_test]
    fn test_refresh_marks_stats_in_flight() {
        let ctx = AppContext::build(Config::default());
        let state = provide_global_state(&ctx);

        refresh_stats(&ctx, state, false);
        assert!(state.refreshing.get_untracked());
    }
}
