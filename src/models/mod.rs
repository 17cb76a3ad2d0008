//! Typed records for the restaurant backend
//!
//! Field names follow the backend's JSON exactly (Portuguese snake_case), so
//! records decode without renames. Booleans stored as SQLite integers go
//! through [`flexible_bool`].

mod auth;
mod dashboard;
mod ingredient;
mod inventory;
mod menu;
mod recipe;
mod sale;
mod table;

pub use auth::{AuthResponse, ChangePassword, Credentials, CurrentUser, NewUser};
pub use dashboard::{
    CategorySales, DailySales, DashboardStats, DishSales, IngredientCounts, ReportPeriod,
    SalesReport, SalesTotals, StockReport, StockReportItem, StockReportStatus, TotalCount,
    TotalValue,
};
pub use ingredient::{
    Ingredient, IngredientQuery, MovementKind, NewIngredient, StockAdjusted, StockMovement,
    StockStatus,
};
pub use inventory::{
    GeneratedItem, InventoryClosed, InventoryCount, InventoryCounted, InventoryGenerated,
    InventoryItem, InventoryQuery, InventoryReopened, InventoryReport, InventoryReportItem,
};
pub use menu::{Menu, MenuDish, MenuQuery, NewMenu, NewMenuDish};
pub use recipe::{
    NewRecipe, NewRecipeIngredient, Recipe, RecipeCreated, RecipeIngredient, RecipeQuery,
};
pub use sale::{NewSale, Sale, SaleRecorded, SalesQuery};
pub use table::{NewTable, Table, TableQrCode, TableSaved};

pub(crate) use inventory::GenerateInventory;
pub(crate) use menu::DishAvailability;

use serde::Deserialize;

/// Plain acknowledgement: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Acknowledgement of a create call carrying the new row id
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Created {
    pub message: String,
    pub id: i64,
}

/// Push an optional filter onto a query pair list
pub(crate) fn push_opt<T: ToString>(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: &Option<T>,
) {
    if let Some(v) = value {
        let v = v.to_string();
        if !v.is_empty() {
            pairs.push((key, v));
        }
    }
}

/// Numeric columns left `NULL` by the backend decode as zero
pub(crate) fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde helpers for booleans the backend sends as `0`/`1`
pub mod flexible_bool {
    use serde::de::{self, Deserializer, Unexpected, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        deserializer.deserialize_any(FlexibleBool)
    }

    struct FlexibleBool;

    impl<'de> Visitor<'de> for FlexibleBool {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a boolean, 0/1, or \"true\"/\"false\"")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
            }
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v {
                "1" | "true" => Ok(true),
                "0" | "false" => Ok(false),
                _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
            }
        }
    }

    /// `true` when the field is absent
    pub fn default_true() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Flag {
        #[serde(with = "flexible_bool")]
        ativo: bool,
    }

    #[test]
    fn test_flexible_bool_accepts_integers() {
        let a: Flag = serde_json::from_str(r#"{"ativo": 1}"#).unwrap();
        let b: Flag = serde_json::from_str(r#"{"ativo": 0}"#).unwrap();
        let c: Flag = serde_json::from_str(r#"{"ativo": true}"#).unwrap();
        assert!(a.ativo);
        assert!(!b.ativo);
        assert!(c.ativo);
    }

    #[test]
    fn test_flexible_bool_rejects_other_numbers() {
        assert!(serde_json::from_str::<Flag>(r#"{"ativo": 2}"#).is_err());
        assert!(serde_json::from_str::<Flag>(r#"{"ativo": "sim"}"#).is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Price {
        #[serde(default, deserialize_with = "zero_if_null")]
        preco_venda: f64,
    }

    #[test]
    fn test_null_numbers_decode_as_zero() {
        let a: Price = serde_json::from_str(r#"{"preco_venda": null}"#).unwrap();
        let b: Price = serde_json::from_str(r#"{}"#).unwrap();
        let c: Price = serde_json::from_str(r#"{"preco_venda": 32}"#).unwrap();
        assert_eq!(a.preco_venda, 0.0);
        assert_eq!(b.preco_venda, 0.0);
        assert_eq!(c.preco_venda, 32.0);
    }

    #[test]
    fn test_push_opt_skips_absent_and_blank() {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "search", &Some("queijo"));
        push_opt::<String>(&mut pairs, "categoria", &None);
        push_opt(&mut pairs, "data", &Some(String::new()));
        push_opt(&mut pairs, "ativo", &Some(true));
        assert_eq!(
            pairs,
            vec![("search", "queijo".to_string()), ("ativo", "true".to_string())]
        );
    }
}
