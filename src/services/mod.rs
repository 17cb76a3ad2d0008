//! Resource services
//!
//! Thin, borrowed views over [`ApiClient`]: each method is exactly one HTTP
//! call through the request wrapper, so every service inherits the bearer
//! header and the unauthorized-redirect rule.

mod auth;
mod dashboard;
mod ingredients;
mod inventory;
mod menus;
mod recipes;
mod tables;

pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use ingredients::IngredientService;
pub use inventory::InventoryService;
pub use menus::MenuService;
pub use recipes::RecipeService;
pub use tables::TableService;

use crate::client::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    pub fn ingredients(&self) -> IngredientService<'_> {
        IngredientService::new(self)
    }

    pub fn recipes(&self) -> RecipeService<'_> {
        RecipeService::new(self)
    }

    pub fn inventory(&self) -> InventoryService<'_> {
        InventoryService::new(self)
    }

    pub fn menus(&self) -> MenuService<'_> {
        MenuService::new(self)
    }

    pub fn tables(&self) -> TableService<'_> {
        TableService::new(self)
    }

    pub fn dashboard(&self) -> DashboardService<'_> {
        DashboardService::new(self)
    }
}
