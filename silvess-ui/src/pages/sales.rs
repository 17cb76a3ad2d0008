//! Sales Page
//!
//! Sales for a date range and the record-sale form.

use leptos::*;
use silvess::models::{NewSale, Recipe, RecipeQuery, Sale, SalesQuery, Table};
use silvess::shell::{ListView, SaleRow};

use super::forms::{parse_id, today};
use crate::api::AppContext;
use crate::components::{Empty, Loading, TextField};
use crate::state::{load, refresh_stats, submit, GlobalState};

#[derive(Clone, Copy)]
struct Range {
    inicio: RwSignal<String>,
    fim: RwSignal<String>,
}

#[component]
pub fn Sales() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let items = create_rw_signal(None::<Vec<Sale>>);
    let range = Range {
        inicio: create_rw_signal(today()),
        fim: create_rw_signal(today()),
    };

    fetch_sales(&ctx, state, range, items);

    let ctx_filter = ctx.clone();
    let on_filter = move |_| fetch_sales(&ctx_filter, state, range, items);

    let fmt = ctx.fmt.clone();
    let table = move || {
        items.get().map(|list| match SaleRow::list(&list, &fmt) {
            ListView::Empty(message) => view! { <Empty message=message /> }.into_view(),
            ListView::Rows(rows) => sale_table(rows).into_view(),
        })
    };

    view! {
        <div class="page">
            <div class="page-toolbar">
                <input
                    type="date"
                    prop:value=move || range.inicio.get()
                    on:input=move |ev| range.inicio.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || range.fim.get()
                    on:input=move |ev| range.fim.set(event_target_value(&ev))
                />
                <button class="btn btn-secondary" on:click=on_filter>
                    <i class="fas fa-filter"></i>
                    " Filtrar"
                </button>
            </div>
            <div class="card">
                {move || table().unwrap_or_else(|| view! { <Loading /> }.into_view())}
            </div>
            <NewSaleForm range=range items=items />
        </div>
    }
}

fn fetch_sales(
    ctx: &AppContext,
    state: GlobalState,
    range: Range,
    items: RwSignal<Option<Vec<Sale>>>,
) {
    let query = SalesQuery::between(range.inicio.get_untracked(), range.fim.get_untracked());
    load(
        ctx,
        state,
        move |client| async move { client.dashboard().sales(&query).await },
        move |list| items.set(Some(list)),
    );
}

fn sale_table(rows: Vec<SaleRow>) -> impl IntoView {
    let body = rows
        .into_iter()
        .map(|row| {
            view! {
                <tr>
                    <td>{row.data}</td>
                    <td>{row.prato}</td>
                    <td>{row.mesa}</td>
                    <td>{row.quantidade}</td>
                    <td>{row.valor_unitario}</td>
                    <td>{row.valor_total}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Data"</th>
                    <th>"Prato"</th>
                    <th>"Mesa"</th>
                    <th>"Qtd."</th>
                    <th>"Unitário"</th>
                    <th>"Total"</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

#[component]
fn NewSaleForm(range: Range, items: RwSignal<Option<Vec<Sale>>>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let recipes = create_rw_signal(Vec::<Recipe>::new());
    let tables = create_rw_signal(Vec::<Table>::new());
    let prato = create_rw_signal(String::new());
    let mesa = create_rw_signal(String::new());
    let quantidade = create_rw_signal("1".to_string());

    load(
        &ctx,
        state,
        |client| async move { client.recipes().list(&RecipeQuery::default()).await },
        move |list| recipes.set(list),
    );
    load(
        &ctx,
        state,
        |client| async move { client.tables().list().await },
        move |list| tables.set(list),
    );

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let quantity = parse_id(&quantidade.get()).filter(|q| *q > 0);
        let (Some(ficha_tecnica_id), Some(quantidade_vendida)) = (parse_id(&prato.get()), quantity)
        else {
            state.notices.update(|n| {
                n.danger("Selecione o prato e a quantidade");
            });
            return;
        };
        let sale = NewSale {
            ficha_tecnica_id,
            quantidade: quantidade_vendida,
            mesa_id: parse_id(&mesa.get()),
        };

        let ctx_done = ctx.clone();
        submit(
            &ctx,
            state,
            move |client| async move { client.dashboard().record_sale(&sale).await },
            move |recorded| {
                let total = ctx_done.fmt.currency(recorded.valor_total);
                state.show_success(&format!("{} ({})", recorded.message, total));
                quantidade.set("1".to_string());
                fetch_sales(&ctx_done, state, range, items);
                refresh_stats(&ctx_done, state, false);
            },
        );
    };

    let dish_options = move || {
        recipes
            .get()
            .into_iter()
            .map(|r| view! { <option value=r.id.to_string()>{r.nome_prato}</option> })
            .collect_view()
    };
    let table_options = move || {
        tables
            .get()
            .into_iter()
            .map(|t| view! { <option value=t.id.to_string()>{format!("Mesa {}", t.numero)}</option> })
            .collect_view()
    };

    view! {
        <form class="card form" on:submit=on_submit>
            <h3>"Registrar venda"</h3>
            <label>"Prato"</label>
            <select on:change=move |ev| prato.set(event_target_value(&ev))>
                <option value="">"Selecione..."</option>
                {dish_options}
            </select>
            <label>"Mesa"</label>
            <select on:change=move |ev| mesa.set(event_target_value(&ev))>
                <option value="">"Balcão"</option>
                {table_options}
            </select>
            <TextField label="Quantidade" value=quantidade kind="number" />
            <button type="submit" class="btn btn-primary">"Registrar"</button>
        </form>
    }
}
