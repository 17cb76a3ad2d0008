//! Recipes Page
//!
//! Recipe cards (fichas técnicas) by category, with cost breakdown.

use leptos::*;
use silvess::models::{Recipe, RecipeQuery};
use silvess::shell::{Destructive, ListView, RecipeRow};

use crate::api::AppContext;
use crate::components::{Empty, Loading};
use crate::state::{confirm_submit, load, refresh_stats, GlobalState};

#[component]
pub fn Recipes() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let items = create_rw_signal(None::<Vec<Recipe>>);
    let categories = create_rw_signal(Vec::<String>::new());
    let categoria = create_rw_signal(String::new());
    let detail = create_rw_signal(None::<Recipe>);

    load(
        &ctx,
        state,
        |client| async move { client.recipes().categories().await },
        move |list| categories.set(list),
    );
    fetch_recipes(&ctx, state, categoria, items);

    let ctx_filter = ctx.clone();
    let on_filter = move |ev: web_sys::Event| {
        categoria.set(event_target_value(&ev));
        detail.set(None);
        fetch_recipes(&ctx_filter, state, categoria, items);
    };

    let fmt = ctx.fmt.clone();
    let table = move || {
        items.get().map(|list| match RecipeRow::list(&list, &fmt) {
            ListView::Empty(message) => view! { <Empty message=message /> }.into_view(),
            ListView::Rows(rows) => {
                view! { <RecipeTable rows=rows categoria=categoria items=items detail=detail /> }
                    .into_view()
            }
        })
    };

    view! {
        <div class="page">
            <div class="page-toolbar">
                <select on:change=on_filter>
                    <option value="">"Todas as categorias"</option>
                    {move || categories.get().into_iter().map(|c| view! {
                        <option value=c.clone()>{c}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="card">
                {move || table().unwrap_or_else(|| view! { <Loading /> }.into_view())}
            </div>

            {move || detail.get().map(|recipe| view! { <RecipeDetail recipe=recipe /> })}
        </div>
    }
}

fn fetch_recipes(
    ctx: &AppContext,
    state: GlobalState,
    categoria: RwSignal<String>,
    items: RwSignal<Option<Vec<Recipe>>>,
) {
    let query = match categoria.get_untracked().as_str() {
        "" => RecipeQuery::default(),
        c => RecipeQuery::category(c),
    };
    load(
        ctx,
        state,
        move |client| async move { client.recipes().list(&query).await },
        move |list| items.set(Some(list)),
    );
}

#[component]
fn RecipeTable(
    rows: Vec<RecipeRow>,
    categoria: RwSignal<String>,
    items: RwSignal<Option<Vec<Recipe>>>,
    detail: RwSignal<Option<Recipe>>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let body = rows
        .into_iter()
        .map(|row| {
            let id = row.id;

            let ctx_view = ctx.clone();
            let on_view = move |_| {
                load(
                    &ctx_view,
                    state,
                    move |client| async move { client.recipes().get(id).await },
                    move |recipe| detail.set(Some(recipe)),
                );
            };

            let ctx_delete = ctx.clone();
            let on_delete = move |_| {
                let ctx_done = ctx_delete.clone();
                confirm_submit(
                    &ctx_delete,
                    state,
                    Destructive::DeleteRecipe,
                    move |client| async move { client.recipes().delete(id).await },
                    move |done| {
                        state.show_success(&done.message);
                        if detail.with_untracked(|d| d.as_ref().map(|r| r.id)) == Some(id) {
                            detail.set(None);
                        }
                        fetch_recipes(&ctx_done, state, categoria, items);
                        refresh_stats(&ctx_done, state, false);
                    },
                );
            };

            view! {
                <tr>
                    <td>{row.prato}</td>
                    <td>{row.categoria}</td>
                    <td>{row.porcoes}</td>
                    <td>{row.custo_total}</td>
                    <td>{row.preco_venda}</td>
                    <td>{row.margem}</td>
                    <td class="actions">
                        <button class="btn btn-sm btn-secondary" title="Ver" on:click=on_view>
                            <i class="fas fa-eye"></i>
                        </button>
                        <button class="btn btn-sm btn-danger" title="Excluir" on:click=on_delete>
                            <i class="fas fa-trash"></i>
                        </button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Prato"</th>
                    <th>"Categoria"</th>
                    <th>"Porções"</th>
                    <th>"Custo"</th>
                    <th>"Preço"</th>
                    <th>"Margem"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

/// Recipe card with its ingredient lines
#[component]
fn RecipeDetail(recipe: Recipe) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let fmt = ctx.fmt.clone();

    let lines = recipe
        .ingredientes
        .iter()
        .map(|line| {
            view! {
                <tr>
                    <td>{line.ingrediente_nome.clone()}</td>
                    <td>{format!("{} {}", fmt.quantity(line.quantidade_gramas), line.unidade_medida)}</td>
                    <td>{fmt.currency(line.custo_unitario)}</td>
                    <td>{fmt.currency(line.custo_parcial)}</td>
                </tr>
            }
        })
        .collect_view();

    let preparo = recipe.modo_preparo.clone().filter(|m| !m.trim().is_empty());

    view! {
        <div class="card recipe-detail">
            <h3>{recipe.nome_prato.clone()}</h3>
            {recipe.descricao.clone().map(|d| view! { <p class="muted">{d}</p> })}
            <div class="detail-grid">
                <span>"Custo total: " {fmt.currency(recipe.custo_total)}</span>
                <span>"Preço de venda: " {fmt.currency(recipe.preco_venda)}</span>
                <span>"Margem: " {fmt.percent(recipe.margem_lucro)}</span>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Ingrediente"</th>
                        <th>"Quantidade"</th>
                        <th>"Custo unitário"</th>
                        <th>"Custo parcial"</th>
                    </tr>
                </thead>
                <tbody>{lines}</tbody>
            </table>
            {preparo.map(|m| view! {
                <h4>"Modo de preparo"</h4>
                <p class="preparo">{m}</p>
            })}
        </div>
    }
}
