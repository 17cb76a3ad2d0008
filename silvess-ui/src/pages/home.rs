//! Home Page
//!
//! Welcome cards pointing at the main areas.

use leptos::*;
use silvess::shell::Page;

use crate::api::AppContext;
use crate::state::GlobalState;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="welcome">
            <h2>"Bem-vindo ao SILVESS"</h2>
            <p>"Escolha uma área para começar."</p>
            <div class="welcome-grid">
                <WelcomeCard page=Page::Ingredients text="Controle de estoque e movimentações" />
                <WelcomeCard page=Page::Recipes text="Fichas técnicas com custo e margem" />
                <WelcomeCard page=Page::Inventory text="Contagem física e fechamento" />
                <WelcomeCard page=Page::Menus text="Cardápios do dia e disponibilidade" />
                <WelcomeCard page=Page::Tables text="Mesas e QR codes" />
                <WelcomeCard page=Page::Reports text="Vendas e posição de estoque" />
            </div>
        </div>
    }
}

#[component]
fn WelcomeCard(page: Page, text: &'static str) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    view! {
        <button class="welcome-card" on:click=move |_| {
            state.navigate(&ctx, page);
        }>
            <i class=page.icon()></i>
            <h3>{page.title()}</h3>
            <p>{text}</p>
        </button>
    }
}
