//! Inventory Page
//!
//! Physical count runs: generate a run for a date, enter counts per item,
//! close or reopen the run and read its difference report.

use leptos::*;
use silvess::models::{InventoryCount, InventoryItem, InventoryQuery, InventoryReport};
use silvess::shell::{Destructive, InventoryRow, InventoryRun, ListView};

use super::forms::{non_empty, today};
use crate::api::AppContext;
use crate::components::{Empty, Loading};
use crate::state::{confirm_submit, load, submit, GlobalState};

#[derive(Clone, Copy)]
struct InventorySignals {
    items: RwSignal<Option<Vec<InventoryItem>>>,
    report: RwSignal<Option<InventoryReport>>,
    adjust_stock: RwSignal<bool>,
}

#[component]
pub fn Inventory() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let signals = InventorySignals {
        items: create_rw_signal(None),
        report: create_rw_signal(None),
        adjust_stock: create_rw_signal(false),
    };
    let date = create_rw_signal(today());

    fetch_items(&ctx, state, signals);

    let ctx_generate = ctx.clone();
    let on_generate = move |_| {
        let data = date.get();
        if data.is_empty() {
            state.notices.update(|n| {
                n.danger("Informe a data do inventário");
            });
            return;
        }
        let ctx_done = ctx_generate.clone();
        submit(
            &ctx_generate,
            state,
            move |client| async move { client.inventory().generate(&data).await },
            move |generated| {
                state.show_success(&generated.message);
                fetch_items(&ctx_done, state, signals);
            },
        );
    };

    let fmt = ctx.fmt.clone();
    let runs = move || {
        signals
            .items
            .get()
            .map(|items| match InventoryRun::group(&items, &fmt) {
                ListView::Empty(message) => view! { <Empty message=message /> }.into_view(),
                ListView::Rows(runs) => runs
                    .into_iter()
                    .map(|run| view! { <RunCard run=run signals=signals /> })
                    .collect_view(),
            })
    };

    view! {
        <div class="page">
            <div class="page-toolbar">
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" on:click=on_generate>
                    <i class="fas fa-clipboard-list"></i>
                    " Gerar inventário"
                </button>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || signals.adjust_stock.get()
                        on:change=move |ev| signals.adjust_stock.set(event_target_checked(&ev))
                    />
                    " Ajustar estoque ao salvar contagem"
                </label>
            </div>

            {move || runs().unwrap_or_else(|| view! { <Loading /> }.into_view())}

            {move || signals.report.get().map(|report| view! { <ReportCard report=report /> })}
        </div>
    }
}

fn fetch_items(ctx: &AppContext, state: GlobalState, signals: InventorySignals) {
    load(
        ctx,
        state,
        |client| async move { client.inventory().list(&InventoryQuery::default()).await },
        move |items| signals.items.set(Some(items)),
    );
}

/// One run: progress, close/reopen, report and the count rows
#[component]
fn RunCard(run: InventoryRun, signals: InventorySignals) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let date = run.date.clone();
    let ctx_close = ctx.clone();
    let date_close = date.clone();
    let on_close = move |_| {
        let data = date_close.clone();
        let ctx_done = ctx_close.clone();
        confirm_submit(
            &ctx_close,
            state,
            Destructive::CloseInventory,
            move |client| async move { client.inventory().close(&data).await },
            move |closed| {
                state.show_success(&closed.message);
                fetch_items(&ctx_done, state, signals);
            },
        );
    };

    let ctx_reopen = ctx.clone();
    let date_reopen = date.clone();
    let on_reopen = move |_| {
        let data = date_reopen.clone();
        let ctx_done = ctx_reopen.clone();
        submit(
            &ctx_reopen,
            state,
            move |client| async move { client.inventory().reopen(&data).await },
            move |reopened| {
                state.show_success(&reopened.message);
                fetch_items(&ctx_done, state, signals);
            },
        );
    };

    let ctx_report = ctx.clone();
    let on_report = move |_| {
        let data = date.clone();
        load(
            &ctx_report,
            state,
            move |client| async move { client.inventory().report(&data).await },
            move |report| signals.report.set(Some(report)),
        );
    };

    let label = run.label.clone();
    let progress = run.progress();
    let status = if run.open { "Aberto" } else { "Fechado" };
    let toggle = if run.open {
        view! {
            <button
                class="btn btn-sm btn-warning"
                disabled=!run.is_complete()
                title="Todos os itens precisam de contagem"
                on:click=on_close
            >
                <i class="fas fa-lock"></i>
                " Fechar"
            </button>
        }
        .into_view()
    } else {
        view! {
            <button class="btn btn-sm btn-secondary" on:click=on_reopen>
                <i class="fas fa-lock-open"></i>
                " Reabrir"
            </button>
        }
        .into_view()
    };

    let rows = run
        .rows
        .into_iter()
        .map(|row| view! { <CountRow row=row signals=signals /> })
        .collect_view();

    view! {
        <div class="card inventory-run">
            <div class="run-header">
                <h3>{label}</h3>
                <span class="badge">{status}</span>
                <span class="muted">{progress}</span>
                <div class="actions">
                    {toggle}
                    <button class="btn btn-sm btn-secondary" on:click=on_report>
                        <i class="fas fa-file-alt"></i>
                        " Relatório"
                    </button>
                </div>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Ingrediente"</th>
                        <th>"Sistema"</th>
                        <th>"Física"</th>
                        <th>"Diferença"</th>
                        <th>"Contagem"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn CountRow(row: InventoryRow, signals: InventorySignals) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let id = row.id;
    let quantidade = create_rw_signal(String::new());
    let observacoes = create_rw_signal(String::new());

    let on_save = move |_| {
        let Some(quantidade_fisica) = ctx.fmt.parse_decimal(&quantidade.get()) else {
            state.notices.update(|n| {
                n.danger("Informe a quantidade contada");
            });
            return;
        };
        let count = InventoryCount {
            quantidade_fisica,
            observacoes: non_empty(&observacoes.get()),
            ajustar_estoque: signals.adjust_stock.get_untracked(),
        };
        let ctx_done = ctx.clone();
        submit(
            &ctx,
            state,
            move |client| async move { client.inventory().update_count(id, &count).await },
            move |counted| {
                state.show_success(&counted.message);
                fetch_items(&ctx_done, state, signals);
            },
        );
    };

    let entry = row.editavel.then(|| {
        view! {
            <input
                class="count-input"
                placeholder="Qtd."
                prop:value=move || quantidade.get()
                on:input=move |ev| quantidade.set(event_target_value(&ev))
            />
            <input
                class="count-note"
                placeholder="Obs."
                prop:value=move || observacoes.get()
                on:input=move |ev| observacoes.set(event_target_value(&ev))
            />
            <button class="btn btn-sm btn-primary" on:click=on_save>
                <i class="fas fa-save"></i>
            </button>
        }
    });

    view! {
        <tr class=if row.counted { "counted" } else { "" }>
            <td>{format!("{} ({})", row.ingrediente, row.unidade)}</td>
            <td>{row.sistema}</td>
            <td>{row.fisica}</td>
            <td>{row.diferenca}</td>
            <td class="count-entry">{entry}</td>
        </tr>
    }
}

#[component]
fn ReportCard(report: InventoryReport) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let fmt = ctx.fmt.clone();

    let lines = report
        .itens
        .iter()
        .filter(|line| line.item.diferenca.is_some_and(|d| d != 0.0))
        .map(|line| {
            view! {
                <tr>
                    <td>{line.item.ingrediente_nome.clone()}</td>
                    <td>{line.item.diferenca.map(|d| fmt.quantity(d)).unwrap_or_default()}</td>
                    <td>{fmt.currency(line.custo_unitario)}</td>
                    <td>{line.valor_diferenca.map(|v| fmt.currency(v)).unwrap_or_default()}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="card inventory-report">
            <h3>{format!("Relatório de {}", fmt.date(&report.data_inventario))}</h3>
            <div class="detail-grid">
                <span>"Itens: " {report.total_itens}</span>
                <span>"Com diferença: " {report.itens_com_diferenca}</span>
                <span>"Valor das diferenças: " {fmt.currency(report.valor_total_diferencas)}</span>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Ingrediente"</th>
                        <th>"Diferença"</th>
                        <th>"Custo unitário"</th>
                        <th>"Valor"</th>
                    </tr>
                </thead>
                <tbody>{lines}</tbody>
            </table>
        </div>
    }
}
