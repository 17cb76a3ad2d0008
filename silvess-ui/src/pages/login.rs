//! Login Page

use leptos::*;

use crate::api::AppContext;
use crate::state::GlobalState;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let (email, set_email) = create_signal(String::new());
    let (senha, set_senha) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = email.get().trim().to_string();
        let senha = senha.get();
        if email.is_empty() || senha.is_empty() {
            state.notices.update(|n| {
                n.danger("Preencha email e senha");
            });
            return;
        }

        set_submitting.set(true);
        let client = ctx.client.clone();
        spawn_local(async move {
            match client.auth().login(&email, &senha).await {
                Ok(auth) => match client.session().establish(&auth.into_session()) {
                    Ok(()) => client.navigator().to_dashboard(),
                    Err(e) => {
                        tracing::error!(error = %e, "Could not persist session");
                        state.notices.update(|n| {
                            n.danger(e.to_string());
                        });
                    }
                },
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <div class="login-header">
                    <i class="fas fa-utensils"></i>
                    <h1>"SILVESS"</h1>
                    <p>"Sistema de Gestão de Restaurante"</p>
                </div>

                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label for="senha">"Senha"</label>
                <input
                    id="senha"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || senha.get()
                    on:input=move |ev| set_senha.set(event_target_value(&ev))
                />

                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Entrando..." } else { "Entrar" }}
                </button>
            </form>
        </div>
    }
}
