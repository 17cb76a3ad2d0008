//! Header Component
//!
//! Page title, breadcrumb, refresh and logout actions and the user badge.

use leptos::*;
use silvess::shell::{confirm_then, Destructive};

use crate::api::AppContext;
use crate::state::{refresh_stats, GlobalState};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let title = move || state.router.with(|r| r.title());
    let breadcrumb = move || state.router.with(|r| r.breadcrumb());

    let toggle = move |_| {
        state.router.update(|r| {
            r.toggle_sidebar();
        });
    };

    let ctx_refresh = ctx.clone();
    let refresh = move |_| refresh_stats(&ctx_refresh, state, true);

    let logout = move |_| {
        let ctx = ctx.clone();
        spawn_local(async move {
            confirm_then(ctx.confirm.as_ref(), Destructive::Logout, || async {
                ctx.client.auth().logout();
            })
            .await;
        });
    };

    view! {
        <header class="header">
            <div class="header-left">
                <button class="menu-toggle" on:click=toggle>
                    <i class="fas fa-bars"></i>
                </button>
                <div>
                    <h1 class="page-title">{title}</h1>
                    <span class="breadcrumb">{breadcrumb}</span>
                </div>
            </div>

            <div class="header-right">
                <button
                    class="btn btn-secondary"
                    title="Atualizar"
                    disabled=move || state.refreshing.get()
                    on:click=refresh
                >
                    <i class="fas fa-sync-alt"></i>
                </button>

                {move || state.user.get().map(|user| view! {
                    <div class="user-badge" title=user.email.clone()>
                        <span class="user-avatar">{user.initial.clone()}</span>
                        <span class="user-name">{user.nome.clone()}</span>
                    </div>
                })}

                <button class="btn btn-danger" title="Sair" on:click=logout>
                    <i class="fas fa-sign-out-alt"></i>
                </button>
            </div>
        </header>
    }
}
