//! Menus Page
//!
//! Daily menus: list, create from recipes, dish availability and deletion.

use leptos::*;
use silvess::models::{Menu, MenuDish, MenuQuery, NewMenu, NewMenuDish, Recipe, RecipeQuery};
use silvess::shell::{Destructive, ListView, MenuRow};

use super::forms::today;
use crate::api::AppContext;
use crate::components::{Empty, Loading, TextField};
use crate::state::{confirm_submit, load, refresh_stats, submit, GlobalState};

#[component]
pub fn Menus() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let items = create_rw_signal(None::<Vec<Menu>>);
    let detail = create_rw_signal(None::<Menu>);

    fetch_menus(&ctx, state, items);

    let fmt = ctx.fmt.clone();
    let table = move || {
        items.get().map(|list| match MenuRow::list(&list, &fmt) {
            ListView::Empty(message) => view! { <Empty message=message /> }.into_view(),
            ListView::Rows(rows) => {
                view! { <MenuTable rows=rows items=items detail=detail /> }.into_view()
            }
        })
    };

    view! {
        <div class="page">
            <div class="card">
                {move || table().unwrap_or_else(|| view! { <Loading /> }.into_view())}
            </div>
            {move || detail.get().map(|menu| view! { <MenuDetail menu=menu detail=detail /> })}
            <NewMenuForm items=items />
        </div>
    }
}

fn fetch_menus(ctx: &AppContext, state: GlobalState, items: RwSignal<Option<Vec<Menu>>>) {
    load(
        ctx,
        state,
        |client| async move { client.menus().list(&MenuQuery::default()).await },
        move |list| items.set(Some(list)),
    );
}

fn open_menu(ctx: &AppContext, state: GlobalState, id: i64, detail: RwSignal<Option<Menu>>) {
    load(
        ctx,
        state,
        move |client| async move { client.menus().get(id).await },
        move |menu| detail.set(Some(menu)),
    );
}

#[component]
fn MenuTable(
    rows: Vec<MenuRow>,
    items: RwSignal<Option<Vec<Menu>>>,
    detail: RwSignal<Option<Menu>>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    rows.into_iter()
        .map(|row| {
            let id = row.id;

            let ctx_view = ctx.clone();
            let on_view = move |_| open_menu(&ctx_view, state, id, detail);

            let ctx_delete = ctx.clone();
            let on_delete = move |_| {
                let ctx_done = ctx_delete.clone();
                confirm_submit(
                    &ctx_delete,
                    state,
                    Destructive::DeleteMenu,
                    move |client| async move { client.menus().delete(id).await },
                    move |done| {
                        state.show_success(&done.message);
                        if detail.with_untracked(|d| d.as_ref().map(|m| m.id)) == Some(id) {
                            detail.set(None);
                        }
                        fetch_menus(&ctx_done, state, items);
                        refresh_stats(&ctx_done, state, false);
                    },
                );
            };

            view! {
                <div class="menu-row">
                    <div>
                        <strong>{row.nome}</strong>
                        <span class="muted">{format!(" {}", row.data)}</span>
                        <p class="muted">{row.descricao}</p>
                    </div>
                    <span class=if row.ativo { "badge badge-success" } else { "badge" }>
                        {if row.ativo { "Ativo" } else { "Inativo" }}
                    </span>
                    <div class="actions">
                        <button class="btn btn-sm btn-secondary" title="Ver" on:click=on_view>
                            <i class="fas fa-eye"></i>
                        </button>
                        <button class="btn btn-sm btn-danger" title="Excluir" on:click=on_delete>
                            <i class="fas fa-trash"></i>
                        </button>
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn MenuDetail(menu: Menu, detail: RwSignal<Option<Menu>>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let fmt = ctx.fmt.clone();
    let menu_id = menu.id;

    let summary = format!(
        "{} de {} pratos disponíveis",
        menu.available_dishes(),
        menu.pratos.len()
    );
    let dishes = menu
        .pratos
        .into_iter()
        .map(|dish| {
            let price = fmt.currency(dish.preco_venda);
            view! { <DishRow menu_id=menu_id dish=dish price=price detail=detail /> }
        })
        .collect_view();

    view! {
        <div class="card menu-detail">
            <h3>{menu.nome}</h3>
            <p class="muted">{fmt.date(&menu.data)} " · " {summary}</p>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Prato"</th>
                        <th>"Categoria"</th>
                        <th>"Preço"</th>
                        <th>"Disponível"</th>
                    </tr>
                </thead>
                <tbody>{dishes}</tbody>
            </table>
        </div>
    }
}

#[component]
fn DishRow(
    menu_id: i64,
    dish: MenuDish,
    price: String,
    detail: RwSignal<Option<Menu>>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    // Slot id, not the recipe id
    let dish_id = dish.id;
    let disponivel = dish.disponivel;

    let on_toggle = move |_| {
        let ctx_done = ctx.clone();
        submit(
            &ctx,
            state,
            move |client| async move {
                client
                    .menus()
                    .set_dish_availability(menu_id, dish_id, !disponivel)
                    .await
            },
            move |done| {
                state.show_success(&done.message);
                open_menu(&ctx_done, state, menu_id, detail);
            },
        );
    };

    view! {
        <tr>
            <td>{dish.nome_prato}</td>
            <td>{dish.categoria.unwrap_or_else(|| "-".to_string())}</td>
            <td>{price}</td>
            <td>
                <button
                    class=if disponivel { "btn btn-sm btn-success" } else { "btn btn-sm btn-secondary" }
                    on:click=on_toggle
                >
                    {if disponivel { "Sim" } else { "Não" }}
                </button>
            </td>
        </tr>
    }
}

#[component]
fn NewMenuForm(items: RwSignal<Option<Vec<Menu>>>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let recipes = create_rw_signal(Vec::<Recipe>::new());
    let data = create_rw_signal(today());
    let nome = create_rw_signal(String::new());
    let descricao = create_rw_signal(String::new());
    let picked = create_rw_signal(Vec::<i64>::new());

    load(
        &ctx,
        state,
        |client| async move { client.recipes().list(&RecipeQuery::default()).await },
        move |list| recipes.set(list),
    );

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let menu = NewMenu {
            data: data.get(),
            nome: nome.get().trim().to_string(),
            descricao: descricao.get().trim().to_string(),
            ativo: true,
            pratos: picked.get().into_iter().map(NewMenuDish::recipe).collect(),
        };
        let ctx_done = ctx.clone();
        submit(
            &ctx,
            state,
            move |client| async move { client.menus().create(&menu).await },
            move |created| {
                state.show_success(&created.message);
                nome.set(String::new());
                descricao.set(String::new());
                picked.set(Vec::new());
                fetch_menus(&ctx_done, state, items);
                refresh_stats(&ctx_done, state, false);
            },
        );
    };

    let choices = move || {
        recipes
            .get()
            .into_iter()
            .map(|recipe| {
                let id = recipe.id;
                view! {
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || picked.with(|p| p.contains(&id))
                            on:change=move |ev| {
                                let on = event_target_checked(&ev);
                                picked.update(|p| {
                                    p.retain(|x| *x != id);
                                    if on {
                                        p.push(id);
                                    }
                                });
                            }
                        />
                        {format!(" {}", recipe.nome_prato)}
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <form class="card form" on:submit=on_submit>
            <h3>"Novo cardápio"</h3>
            <TextField label="Data" value=data kind="date" />
            <TextField label="Nome" value=nome />
            <TextField label="Descrição" value=descricao />
            <label>"Pratos"</label>
            <div class="checkbox-list">{choices}</div>
            <button type="submit" class="btn btn-primary">"Salvar"</button>
        </form>
    }
}
