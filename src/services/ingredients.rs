use crate::client::{ApiClient, ClientResult};
use crate::models::{
    Created, Ingredient, IngredientQuery, MessageResponse, NewIngredient, StockAdjusted,
    StockMovement,
};

pub struct IngredientService<'a> {
    client: &'a ApiClient,
}

impl<'a> IngredientService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &IngredientQuery) -> ClientResult<Vec<Ingredient>> {
        self.client
            .get_with_query("/ingredientes", &query.to_query())
            .await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Ingredient> {
        self.client.get(&format!("/ingredientes/{}", id)).await
    }

    pub async fn create(&self, ingredient: &NewIngredient) -> ClientResult<Created> {
        self.client.post("/ingredientes", ingredient).await
    }

    pub async fn update(&self, id: i64, ingredient: &NewIngredient) -> ClientResult<MessageResponse> {
        self.client
            .put(&format!("/ingredientes/{}", id), ingredient)
            .await
    }

    /// Soft delete: the backend marks the ingredient inactive
    pub async fn delete(&self, id: i64) -> ClientResult<MessageResponse> {
        self.client.delete(&format!("/ingredientes/{}", id)).await
    }

    /// Record a stock entry or exit
    pub async fn adjust_stock(
        &self,
        id: i64,
        movement: &StockMovement,
    ) -> ClientResult<StockAdjusted> {
        self.client
            .post(&format!("/ingredientes/{}/estoque", id), movement)
            .await
    }

    /// Ingredients at or below their minimum stock
    pub async fn low_stock(&self) -> ClientResult<Vec<Ingredient>> {
        self.client.get("/ingredientes/estoque-baixo").await
    }
}
