use crate::client::{ApiClient, ClientResult};
use crate::models::{
    GenerateInventory, InventoryClosed, InventoryCount, InventoryCounted, InventoryGenerated,
    InventoryItem, InventoryQuery, InventoryReopened, InventoryReport,
};

/// Dated inventory runs: generate, count, close, reopen, report
pub struct InventoryService<'a> {
    client: &'a ApiClient,
}

impl<'a> InventoryService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &InventoryQuery) -> ClientResult<Vec<InventoryItem>> {
        self.client
            .get_with_query("/inventario", &query.to_query())
            .await
    }

    /// Snapshot current stock of every active ingredient for `date` (YYYY-MM-DD)
    pub async fn generate(&self, date: &str) -> ClientResult<InventoryGenerated> {
        let body = GenerateInventory {
            data_inventario: date,
        };
        self.client.post("/inventario/gerar", &body).await
    }

    pub async fn update_count(
        &self,
        id: i64,
        count: &InventoryCount,
    ) -> ClientResult<InventoryCounted> {
        self.client.put(&format!("/inventario/{}", id), count).await
    }

    /// Lock a run; rejected while any item lacks a physical count
    pub async fn close(&self, date: &str) -> ClientResult<InventoryClosed> {
        self.client
            .post_empty(&format!("/inventario/fechar/{}", date))
            .await
    }

    pub async fn reopen(&self, date: &str) -> ClientResult<InventoryReopened> {
        self.client
            .post_empty(&format!("/inventario/reabrir/{}", date))
            .await
    }

    pub async fn report(&self, date: &str) -> ClientResult<InventoryReport> {
        self.client
            .get(&format!("/inventario/relatorio/{}", date))
            .await
    }
}
