//! Pages
//!
//! The login screen and one component per dashboard page.

pub mod forms;
pub mod home;
pub mod ingredients;
pub mod inventory;
pub mod login;
pub mod menus;
pub mod recipes;
pub mod reports;
pub mod sales;
pub mod tables;

pub use home::Home;
pub use ingredients::Ingredients;
pub use inventory::Inventory;
pub use login::Login;
pub use menus::Menus;
pub use recipes::Recipes;
pub use reports::Reports;
pub use sales::Sales;
pub use tables::Tables;
