//! Loading and empty states

use leptos::*;

/// Spinner shown until a page's first load lands
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <i class="fas fa-spinner fa-spin"></i>
            " Carregando..."
        </div>
    }
}

/// Placeholder row text for an empty list
#[component]
pub fn Empty(message: &'static str) -> impl IntoView {
    view! {
        <p class="empty-state">{message}</p>
    }
}
