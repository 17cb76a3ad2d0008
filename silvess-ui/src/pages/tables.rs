//! Tables Page

use leptos::*;
use silvess::models::{Menu, MenuQuery, NewTable, Table, TableQrCode};
use silvess::shell::{ListView, TableRow};

use super::forms::parse_id;
use crate::api::AppContext;
use crate::components::{Empty, Loading, TextField};
use crate::state::{load, submit, GlobalState};

#[component]
pub fn Tables() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let items = create_rw_signal(None::<Vec<Table>>);
    let qr = create_rw_signal(None::<TableQrCode>);

    fetch_tables(&ctx, state, items);

    let fmt = ctx.fmt.clone();
    let table = move || {
        items.get().map(|list| match TableRow::list(&list, &fmt) {
            ListView::Empty(message) => view! { <Empty message=message /> }.into_view(),
            ListView::Rows(rows) => view! { <TableList rows=rows qr=qr /> }.into_view(),
        })
    };

    view! {
        <div class="page">
            <div class="card">
                {move || table().unwrap_or_else(|| view! { <Loading /> }.into_view())}
            </div>
            {move || qr.get().map(|code| {
                let link = code.qrcode_url.clone();
                view! {
                    <div class="card qrcode">
                        <h3>{format!("Mesa {}", code.mesa_numero)}</h3>
                        <img src=code.qrcode_url alt="QR Code" />
                        <a href=link target="_blank" class="btn btn-secondary">"Abrir"</a>
                    </div>
                }
            })}
            <NewTableForm items=items />
        </div>
    }
}

fn fetch_tables(ctx: &AppContext, state: GlobalState, items: RwSignal<Option<Vec<Table>>>) {
    load(
        ctx,
        state,
        |client| async move { client.tables().list().await },
        move |list| items.set(Some(list)),
    );
}

#[component]
fn TableList(rows: Vec<TableRow>, qr: RwSignal<Option<TableQrCode>>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let body = rows
        .into_iter()
        .map(|row| {
            let id = row.id;
            let ctx = ctx.clone();
            let on_qr = move |_| {
                load(
                    &ctx,
                    state,
                    move |client| async move { client.tables().qr_code(id).await },
                    move |code| qr.set(Some(code)),
                );
            };

            view! {
                <tr>
                    <td>{row.numero}</td>
                    <td>{row.cardapio}</td>
                    <td>
                        <button
                            class="btn btn-sm btn-secondary"
                            disabled=!row.has_qr_code
                            title="QR Code"
                            on:click=on_qr
                        >
                            <i class="fas fa-qrcode"></i>
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
                    <th>"Mesa"</th>
                    <th>"Cardápio"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

#[component]
fn NewTableForm(items: RwSignal<Option<Vec<Table>>>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let fmt = ctx.fmt.clone();
    let menus = create_rw_signal(Vec::<Menu>::new());
    let numero = create_rw_signal(String::new());
    let cardapio = create_rw_signal(String::new());

    load(
        &ctx,
        state,
        |client| async move {
            client
                .menus()
                .list(&MenuQuery {
                    ativo: Some(true),
                    ..Default::default()
                })
                .await
        },
        move |list| menus.set(list),
    );

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(numero_mesa) = parse_id(&numero.get()) else {
            state.notices.update(|n| {
                n.danger("Informe o número da mesa");
            });
            return;
        };
        let mesa = NewTable {
            numero: numero_mesa,
            cardapio_id: parse_id(&cardapio.get()),
            ativo: true,
        };
        let ctx_done = ctx.clone();
        submit(
            &ctx,
            state,
            move |client| async move { client.tables().create(&mesa).await },
            move |saved| {
                state.show_success(&saved.message);
                numero.set(String::new());
                fetch_tables(&ctx_done, state, items);
            },
        );
    };

    let options = move || {
        menus
            .get()
            .into_iter()
            .map(|menu| {
                view! {
                    <option value=menu.id.to_string()>
                        {format!("{} ({})", menu.nome, fmt.date(&menu.data))}
                    </option>
                }
            })
            .collect_view()
    };

    view! {
        <form class="card form" on:submit=on_submit>
            <h3>"Nova mesa"</h3>
            <TextField label="Número" value=numero kind="number" />
            <label>"Cardápio"</label>
            <select on:change=move |ev| cardapio.set(event_target_value(&ev))>
                <option value="">"Sem cardápio"</option>
                {options}
            </select>
            <button type="submit" class="btn btn-primary">"Salvar"</button>
        </form>
    }
}
