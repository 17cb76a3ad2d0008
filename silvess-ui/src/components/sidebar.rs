//! Sidebar Component
//!
//! Page menu with the active entry highlighted. On narrow screens it slides
//! in over the content and closes after a pick.

use leptos::*;
use silvess::shell::MenuEntry;

use crate::api::AppContext;
use crate::state::GlobalState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let open_class = move || {
        if state.router.with(|r| r.sidebar_open()) {
            "sidebar open"
        } else {
            "sidebar"
        }
    };

    view! {
        <aside class=open_class>
            <div class="sidebar-header">
                <i class="fas fa-utensils"></i>
                <span class="brand">"SILVESS"</span>
            </div>
            <nav class="sidebar-menu">
                <For
                    each=move || state.router.with(|r| r.menu())
                    key=|entry| (entry.page, entry.active)
                    children=move |entry| view! { <SidebarLink entry=entry /> }
                />
            </nav>
        </aside>
    }
}

#[component]
fn SidebarLink(entry: MenuEntry) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();
    let page = entry.page;

    view! {
        <a
            href="#"
            class=if entry.active { "menu-item active" } else { "menu-item" }
            on:click=move |ev| {
                ev.prevent_default();
                state.navigate(&ctx, page);
            }
        >
            <i class=entry.icon></i>
            <span>{entry.title}</span>
        </a>
    }
}
