use crate::client::{ApiClient, ClientResult};
use crate::models::{MessageResponse, NewRecipe, Recipe, RecipeCreated, RecipeQuery};

pub struct RecipeService<'a> {
    client: &'a ApiClient,
}

impl<'a> RecipeService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &RecipeQuery) -> ClientResult<Vec<Recipe>> {
        self.client.get_with_query("/fichas", &query.to_query()).await
    }

    /// Recipe with its ingredient lines
    pub async fn get(&self, id: i64) -> ClientResult<Recipe> {
        self.client.get(&format!("/fichas/{}", id)).await
    }

    pub async fn create(&self, recipe: &NewRecipe) -> ClientResult<RecipeCreated> {
        self.client.post("/fichas", recipe).await
    }

    pub async fn update(&self, id: i64, recipe: &NewRecipe) -> ClientResult<MessageResponse> {
        self.client.put(&format!("/fichas/{}", id), recipe).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<MessageResponse> {
        self.client.delete(&format!("/fichas/{}", id)).await
    }

    /// Distinct categories of active recipes
    pub async fn categories(&self) -> ClientResult<Vec<String>> {
        self.client.get("/fichas/categorias").await
    }
}
