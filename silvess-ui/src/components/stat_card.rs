//! Stat Cards
//!
//! Header summary: ingredients, low stock, recipes and today's sales.

use leptos::*;

use crate::state::GlobalState;

#[component]
pub fn StatCards() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let stats = state.stats;

    view! {
        <div class="stats-grid">
            <StatCard
                icon="fas fa-carrot"
                label="Ingredientes"
                value=Signal::derive(move || stats.with(|s| s.ingredientes.clone()))
            />
            <StatCard
                icon="fas fa-exclamation-triangle"
                label="Estoque Baixo"
                value=Signal::derive(move || stats.with(|s| s.estoque_baixo.clone()))
                variant="warning"
            />
            <StatCard
                icon="fas fa-book"
                label="Fichas Técnicas"
                value=Signal::derive(move || stats.with(|s| s.fichas.clone()))
            />
            <StatCard
                icon="fas fa-dollar-sign"
                label="Vendas Hoje"
                value=Signal::derive(move || stats.with(|s| s.vendas_hoje.clone()))
                detail=Signal::derive(move || stats.with(|s| s.vendas_hoje_qtd.clone()))
                variant="success"
            />
        </div>
    }
}

/// Single stat card
#[component]
fn StatCard(
    icon: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    /// Optional second line under the value
    #[prop(optional, into)]
    detail: Option<Signal<String>>,
    #[prop(default = "primary")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-{}", variant)>
            <div class="stat-icon">
                <i class=icon></i>
            </div>
            <div class="stat-info">
                <span class="stat-label">{label}</span>
                <span class="stat-value">{move || value.get()}</span>
                {move || detail.map(|d| view! {
                    <span class="stat-detail">{move || d.get()}</span>
                })}
            </div>
        </div>
    }
}
