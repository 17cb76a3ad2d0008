//! Toast Notification Component
//!
//! Renders the queued notices as dismissible alert banners.

use leptos::*;
use silvess::shell::Notice;

use crate::state::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="alert-container">
            <For
                each=move || state.notices.with(|n| n.items().to_vec())
                key=|notice| notice.id
                children=move |notice| view! { <ToastMessage notice=notice /> }
            />
        </div>
    }
}

#[component]
fn ToastMessage(notice: Notice) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let id = notice.id;

    view! {
        <div class=format!("alert {}", notice.kind.css_class())>
            <span class="alert-icon">{notice.kind.icon()}</span>
            <span class="alert-message">{notice.message}</span>
            <button class="alert-close" on:click=move |_| state.dismiss(id)>
                "×"
            </button>
        </div>
    }
}
