//! Reports Page
//!
//! Sales report for a date range and the current stock position.

use std::rc::Rc;

use leptos::*;
use silvess::models::{SalesReport, StockReport, StockReportStatus};
use silvess::Formatter;

use super::forms::today;
use crate::api::AppContext;
use crate::components::Loading;
use crate::state::{load, GlobalState};

#[component]
pub fn Reports() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<GlobalState>();

    let first_of_month = chrono::Local::now().format("%Y-%m-01").to_string();
    let inicio = create_rw_signal(first_of_month);
    let fim = create_rw_signal(today());
    let sales = create_rw_signal(None::<SalesReport>);
    let stock = create_rw_signal(None::<StockReport>);

    let fetch_sales = {
        let ctx = ctx.clone();
        move || {
            let (from, to) = (inicio.get_untracked(), fim.get_untracked());
            load(
                &ctx,
                state,
                move |client| async move { client.dashboard().sales_report(&from, &to).await },
                move |report| sales.set(Some(report)),
            );
        }
    };
    fetch_sales();
    load(
        &ctx,
        state,
        |client| async move { client.dashboard().stock_report().await },
        move |report| stock.set(Some(report)),
    );

    let fmt = ctx.fmt.clone();
    let fmt_stock = ctx.fmt.clone();

    view! {
        <div class="page">
            <div class="page-toolbar">
                <input
                    type="date"
                    prop:value=move || inicio.get()
                    on:input=move |ev| inicio.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || fim.get()
                    on:input=move |ev| fim.set(event_target_value(&ev))
                />
                <button class="btn btn-secondary" on:click=move |_| fetch_sales()>
                    <i class="fas fa-chart-line"></i>
                    " Gerar relatório"
                </button>
            </div>

            {move || match sales.get() {
                Some(report) => sales_view(report, fmt.clone()).into_view(),
                None => view! { <Loading /> }.into_view(),
            }}

            {move || match stock.get() {
                Some(report) => stock_view(report, fmt_stock.clone()).into_view(),
                None => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

fn sales_view(report: SalesReport, fmt: Rc<Formatter>) -> impl IntoView {
    let period = format!(
        "{} a {}",
        fmt.date(&report.periodo.data_inicio),
        fmt.date(&report.periodo.data_fim)
    );

    let dishes = report
        .vendas_por_prato
        .iter()
        .map(|d| {
            view! {
                <tr>
                    <td>{d.nome_prato.clone()}</td>
                    <td>{d.categoria.clone().unwrap_or_else(|| "-".to_string())}</td>
                    <td>{fmt.quantity(d.quantidade_total)}</td>
                    <td>{fmt.currency(d.valor_total)}</td>
                </tr>
            }
        })
        .collect_view();

    let days = report
        .vendas_por_dia
        .iter()
        .map(|d| {
            view! {
                <tr>
                    <td>{fmt.date(&d.data)}</td>
                    <td>{d.total_vendas}</td>
                    <td>{fmt.currency(d.valor_total)}</td>
                </tr>
            }
        })
        .collect_view();

    let categories = report
        .vendas_por_categoria
        .iter()
        .map(|c| {
            view! {
                <tr>
                    <td>{c.categoria.clone().unwrap_or_else(|| "Sem categoria".to_string())}</td>
                    <td>{c.total_vendas}</td>
                    <td>{fmt.currency(c.valor_total)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="card report">
            <h3>"Relatório de vendas"</h3>
            <p class="muted">{period}</p>
            <div class="detail-grid">
                <span>"Vendas: " {report.totais.total_vendas}</span>
                <span>"Faturamento: " {fmt.currency(report.totais.valor_total)}</span>
                <span>"Ticket médio: " {fmt.currency(report.totais.ticket_medio)}</span>
            </div>

            <h4>"Por prato"</h4>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Prato"</th>
                        <th>"Categoria"</th>
                        <th>"Quantidade"</th>
                        <th>"Total"</th>
                    </tr>
                </thead>
                <tbody>{dishes}</tbody>
            </table>

            <h4>"Por dia"</h4>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Data"</th>
                        <th>"Vendas"</th>
                        <th>"Total"</th>
                    </tr>
                </thead>
                <tbody>{days}</tbody>
            </table>

            <h4>"Por categoria"</h4>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Categoria"</th>
                        <th>"Vendas"</th>
                        <th>"Total"</th>
                    </tr>
                </thead>
                <tbody>{categories}</tbody>
            </table>
        </div>
    }
}

fn status_badge(status: StockReportStatus) -> &'static str {
    match status {
        StockReportStatus::Critico => "badge badge-danger",
        StockReportStatus::Baixo => "badge badge-warning",
        StockReportStatus::Normal => "badge badge-success",
    }
}

fn stock_view(report: StockReport, fmt: Rc<Formatter>) -> impl IntoView {
    let rows = report
        .ingredientes
        .iter()
        .map(|item| {
            view! {
                <tr>
                    <td>{item.nome.clone()}</td>
                    <td>{format!("{} {}", fmt.quantity(item.estoque_atual), item.unidade_medida)}</td>
                    <td>{fmt.quantity(item.estoque_minimo)}</td>
                    <td>{fmt.currency(item.valor_estoque)}</td>
                    <td>
                        <span class=status_badge(item.status_estoque)>
                            {item.status_estoque.label()}
                        </span>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="card report">
            <h3>"Posição de estoque"</h3>
            <div class="detail-grid">
                <span>"Ingredientes: " {report.total_ingredientes}</span>
                <span>"Valor em estoque: " {fmt.currency(report.valor_total_estoque)}</span>
                <span>"Críticos: " {report.criticos}</span>
                <span>"Baixos: " {report.baixos}</span>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Ingrediente"</th>
                        <th>"Estoque"</th>
                        <th>"Mínimo"</th>
                        <th>"Valor"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
