//! Form fields

use leptos::*;

/// Labelled text input bound to a signal
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")]
    kind: &'static str,
) -> impl IntoView {
    view! {
        <label>{label}</label>
        <input
            type=kind
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
