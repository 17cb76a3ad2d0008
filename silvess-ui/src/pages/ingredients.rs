//! Ingredients Page
//!
//! Stock list with low-stock badges, debounced search, creation, stock
//! movements and confirmed deletion.

use gloo_timers::callback::Timeout;
use leptos::*;
use silvess::models::{Ingredient, IngredientQuery, MovementKind, NewIngredient, StockMovement};
use silvess::shell::{Destructive, IngredientRow, ListView};

use super::forms::{non_empty, parse_id};
use crate::api::AppContext;
use crate::components::{Empty, Loading, TextField};
use crate::state::{confirm_submit, load_latest, refresh_stats, submit, GlobalState};

#[component]
pub fn Ingredients() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let items = create_rw_signal(None::<Vec<Ingredient>>);
    let search = create_rw_signal(String::new());
    let debounce = store_value(None::<Timeout>);

    fetch_ingredients(&ctx, state, search, items);

    let ctx_search = ctx.clone();
    let on_search = move |ev: web_sys::Event| {
        search.set(event_target_value(&ev));
        let ctx = ctx_search.clone();
        // Replacing the handle drops (and cancels) the previous timer
        debounce.set_value(Some(Timeout::new(
            ctx.config.ui.search_debounce_ms,
            move || fetch_ingredients(&ctx, state, search, items),
        )));
    };

    let fmt = ctx.fmt.clone();
    let rows = move || {
        items.get().map(|list| match IngredientRow::list(&list, &fmt) {
            ListView::Empty(message) => view! { <Empty message=message /> }.into_view(),
            ListView::Rows(rows) => {
                view! { <IngredientTable rows=rows search=search items=items /> }.into_view()
            }
        })
    };

    view! {
        <div class="page">
            <div class="page-toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Buscar ingrediente..."
                    prop:value=move || search.get()
                    on:input=on_search
                />
            </div>

            <div class="card">
                {move || rows().unwrap_or_else(|| view! { <Loading /> }.into_view())}
            </div>

            <div class="form-grid">
                <NewIngredientForm search=search items=items />
                <StockMovementForm items=items search=search />
            </div>
        </div>
    }
}

fn fetch_ingredients(
    ctx: &AppContext,
    state: GlobalState,
    search: RwSignal<String>,
    items: RwSignal<Option<Vec<Ingredient>>>,
) {
    let query = match search.get_untracked().trim() {
        "" => IngredientQuery::default(),
        term => IngredientQuery::search(term),
    };
    // A slow response for an older term must not overwrite a newer one
    load_latest(
        ctx,
        state,
        "ingredients",
        move |client| async move { client.ingredients().list(&query).await },
        move |list| items.set(Some(list)),
    );
}

#[component]
fn IngredientTable(
    rows: Vec<IngredientRow>,
    search: RwSignal<String>,
    items: RwSignal<Option<Vec<Ingredient>>>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let body = rows
        .into_iter()
        .map(|row| {
            let ctx = ctx.clone();
            let id = row.id;
            let on_delete = move |_| {
                let ctx_done = ctx.clone();
                confirm_submit(
                    &ctx,
                    state,
                    Destructive::DeleteIngredient,
                    move |client| async move { client.ingredients().delete(id).await },
                    move |done| {
                        state.show_success(&done.message);
                        fetch_ingredients(&ctx_done, state, search, items);
                        refresh_stats(&ctx_done, state, false);
                    },
                );
            };

            view! {
                <tr>
                    <td>{row.nome}</td>
                    <td>{row.unidade}</td>
                    <td>{row.custo_unitario}</td>
                    <td>{row.estoque_atual}</td>
                    <td>{row.estoque_minimo}</td>
                    <td>
                        <span class=row.status.badge_class()>{row.status.label()}</span>
                    </td>
                    <td>
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
                    <th>"Nome"</th>
                    <th>"Unidade"</th>
                    <th>"Custo"</th>
                    <th>"Estoque"</th>
                    <th>"Mínimo"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

#[component]
fn NewIngredientForm(
    search: RwSignal<String>,
    items: RwSignal<Option<Vec<Ingredient>>>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let nome = create_rw_signal(String::new());
    let unidade = create_rw_signal("kg".to_string());
    let custo = create_rw_signal(String::new());
    let atual = create_rw_signal(String::new());
    let minimo = create_rw_signal(String::new());
    let fornecedor = create_rw_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(custo_unitario) = ctx.fmt.parse_decimal(&custo.get()) else {
            state.notices.update(|n| {
                n.danger("Informe o custo unitário");
            });
            return;
        };
        let ingredient = NewIngredient {
            nome: nome.get().trim().to_string(),
            unidade_medida: unidade.get(),
            custo_unitario,
            estoque_atual: ctx.fmt.parse_decimal(&atual.get()),
            estoque_minimo: ctx.fmt.parse_decimal(&minimo.get()),
            fornecedor: non_empty(&fornecedor.get()),
        };

        let ctx_done = ctx.clone();
        submit(
            &ctx,
            state,
            move |client| async move { client.ingredients().create(&ingredient).await },
            move |created| {
                state.show_success(&created.message);
                for field in [nome, custo, atual, minimo, fornecedor] {
                    field.set(String::new());
                }
                fetch_ingredients(&ctx_done, state, search, items);
                refresh_stats(&ctx_done, state, false);
            },
        );
    };

    view! {
        <form class="card form" on:submit=on_submit>
            <h3>"Novo ingrediente"</h3>
            <TextField label="Nome" value=nome />
            <label>"Unidade"</label>
            <select on:change=move |ev| unidade.set(event_target_value(&ev))>
                <option value="kg" selected=true>"kg"</option>
                <option value="g">"g"</option>
                <option value="l">"l"</option>
                <option value="ml">"ml"</option>
                <option value="un">"un"</option>
            </select>
            <TextField label="Custo unitário (R$)" value=custo />
            <TextField label="Estoque atual" value=atual />
            <TextField label="Estoque mínimo" value=minimo />
            <TextField label="Fornecedor" value=fornecedor />
            <button type="submit" class="btn btn-primary">"Salvar"</button>
        </form>
    }
}

#[component]
fn StockMovementForm(
    items: RwSignal<Option<Vec<Ingredient>>>,
    search: RwSignal<String>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let selected = create_rw_signal(String::new());
    let tipo = create_rw_signal(MovementKind::Entrada);
    let quantidade = create_rw_signal(String::new());
    let observacao = create_rw_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let (Some(id), Some(qty)) = (
            parse_id(&selected.get()),
            ctx.fmt.parse_decimal(&quantidade.get()),
        ) else {
            state.notices.update(|n| {
                n.danger("Selecione o ingrediente e a quantidade");
            });
            return;
        };
        let movement = StockMovement {
            tipo: tipo.get(),
            quantidade: qty,
            observacao: observacao.get().trim().to_string(),
        };

        let ctx_done = ctx.clone();
        submit(
            &ctx,
            state,
            move |client| async move { client.ingredients().adjust_stock(id, &movement).await },
            move |adjusted| {
                state.show_success(&adjusted.message);
                quantidade.set(String::new());
                observacao.set(String::new());
                fetch_ingredients(&ctx_done, state, search, items);
                refresh_stats(&ctx_done, state, false);
            },
        );
    };

    let options = move || {
        items
            .get()
            .unwrap_or_default()
            .into_iter()
            .map(|ing| view! { <option value=ing.id.to_string()>{ing.nome}</option> })
            .collect_view()
    };

    view! {
        <form class="card form" on:submit=on_submit>
            <h3>"Movimentação de estoque"</h3>
            <label>"Ingrediente"</label>
            <select on:change=move |ev| selected.set(event_target_value(&ev))>
                <option value="">"Selecione..."</option>
                {options}
            </select>
            <label>"Tipo"</label>
            <select on:change=move |ev| {
                let kind = match event_target_value(&ev).as_str() {
                    "saida" => MovementKind::Saida,
                    _ => MovementKind::Entrada,
                };
                tipo.set(kind);
            }>
                <option value="entrada">{MovementKind::Entrada.label()}</option>
                <option value="saida">{MovementKind::Saida.label()}</option>
            </select>
            <TextField label="Quantidade" value=quantidade />
            <TextField label="Observação" value=observacao />
            <button type="submit" class="btn btn-primary">"Registrar"</button>
        </form>
    }
}
