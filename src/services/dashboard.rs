use crate::client::{ApiClient, ClientResult};
use crate::models::{
    DashboardStats, NewSale, Sale, SaleRecorded, SalesQuery, SalesReport, StockReport,
};

/// Stats, sales and reports
pub struct DashboardService<'a> {
    client: &'a ApiClient,
}

impl<'a> DashboardService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self) -> ClientResult<DashboardStats> {
        self.client.get("/dashboard/stats").await
    }

    pub async fn sales(&self, query: &SalesQuery) -> ClientResult<Vec<Sale>> {
        self.client
            .get_with_query("/dashboard/vendas", &query.to_query())
            .await
    }

    pub async fn record_sale(&self, sale: &NewSale) -> ClientResult<SaleRecorded> {
        self.client.post("/dashboard/vendas", sale).await
    }

    /// Both bounds are required by the backend (YYYY-MM-DD, inclusive)
    pub async fn sales_report(&self, inicio: &str, fim: &str) -> ClientResult<SalesReport> {
        self.client
            .get_with_query(
                "/dashboard/relatorio/vendas",
                &SalesQuery::between(inicio, fim).to_query(),
            )
            .await
    }

    pub async fn stock_report(&self) -> ClientResult<StockReport> {
        self.client.get("/dashboard/relatorio/estoque").await
    }
}
