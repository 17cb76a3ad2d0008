//! App Root Component
//!
//! Routing between the login screen and the dashboard, plus the dashboard
//! layout. Page switching inside the dashboard is router state, not URLs.

use leptos::*;
use leptos_router::*;
use silvess::shell::Page;

use crate::api::AppContext;
use crate::components::{Header, Sidebar, StatCards, Toast};
use crate::pages::{
    Home, Ingredients, Inventory, Login, Menus, Recipes, Reports, Sales, Tables,
};
use crate::state::{provide_global_state, refresh_stats, GlobalState};

/// Root application component
#[component]
pub fn App(ctx: AppContext) -> impl IntoView {
    let login_path = ctx.config.api.login_path.clone();
    let dashboard_path = ctx.config.api.dashboard_path.clone();

    provide_context(ctx.clone());
    provide_global_state(&ctx);

    view! {
        <Router>
            <Routes>
                <Route path=login_path view=LoginRoute />
                <Route path=dashboard_path view=DashboardRoute />
                <Route path="/*any" view=NotFound />
            </Routes>
            <Toast />
        </Router>
    }
}

/// Signed-in users skip the login form
#[component]
fn LoginRoute() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    if ctx.client.session().is_authenticated() {
        let path = ctx.config.api.dashboard_path.clone();
        view! { <Redirect path=path /> }.into_view()
    } else {
        view! { <Login /> }.into_view()
    }
}

/// The dashboard requires a session
#[component]
fn DashboardRoute() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    if ctx.client.session().is_authenticated() {
        view! { <Dashboard /> }.into_view()
    } else {
        let path = ctx.config.api.login_path.clone();
        view! { <Redirect path=path /> }.into_view()
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    track_viewport(state);
    refresh_stats(&ctx, state, false);

    let overlay = move || {
        let router = state.router.get();
        (router.sidebar_open() && router.is_mobile()).then(|| {
            view! {
                <div
                    class="sidebar-overlay"
                    on:click=move |_| state.router.update(|r| {
                        r.toggle_sidebar();
                    })
                ></div>
            }
        })
    };

    view! {
        <div class="dashboard">
            <Sidebar />
            {overlay}
            <main class="main-content">
                <Header />
                <StatCards />
                <section class="page-content">
                    {move || {
                        state.visit.track();
                        page_view(state.router.with_untracked(|r| r.active()))
                    }}
                </section>
            </main>
        </div>
    }
}

fn page_view(page: Page) -> View {
    match page {
        Page::Home => view! { <Home /> }.into_view(),
        Page::Ingredients => view! { <Ingredients /> }.into_view(),
        Page::Recipes => view! { <Recipes /> }.into_view(),
        Page::Inventory => view! { <Inventory /> }.into_view(),
        Page::Menus => view! { <Menus /> }.into_view(),
        Page::Tables => view! { <Tables /> }.into_view(),
        Page::Sales => view! { <Sales /> }.into_view(),
        Page::Reports => view! { <Reports /> }.into_view(),
    }
}

/// Keep the router's mobile flag in step with the window width
fn track_viewport(state: GlobalState) {
    let read_width = || {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map(|w| w as u32)
    };

    if let Some(width) = read_width() {
        state.router.update(|r| r.set_viewport_width(width));
    }

    let handle = window_event_listener(ev::resize, move |_| {
        if let Some(width) = read_width() {
            state.router.update(|r| r.set_viewport_width(width));
        }
    });
    on_cleanup(move || handle.remove());
}

/// Unknown paths
#[component]
fn NotFound() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let home = ctx.config.api.dashboard_path.clone();

    view! {
        <div class="not-found">
            <h1>"Página não encontrada"</h1>
            <A href=home class="btn btn-primary">
                "Voltar ao painel"
            </A>
        </div>
    }
}
