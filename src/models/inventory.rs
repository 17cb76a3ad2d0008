use serde::{Deserialize, Serialize};

use super::{flexible_bool, push_opt, zero_if_null};

/// One ingredient line of a dated inventory run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub data_inventario: String,
    pub ingrediente_id: i64,
    pub ingrediente_nome: String,
    #[serde(default)]
    pub unidade_medida: String,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub quantidade_sistema: f64,
    #[serde(default)]
    pub quantidade_fisica: Option<f64>,
    #[serde(default)]
    pub diferenca: Option<f64>,
    #[serde(default)]
    pub observacoes: Option<String>,
    /// Cleared when the run is closed
    #[serde(with = "flexible_bool", default = "flexible_bool::default_true")]
    pub editavel: bool,
    #[serde(default)]
    pub usuario_nome: Option<String>,
}

impl InventoryItem {
    /// Physical count has been entered
    pub fn is_counted(&self) -> bool {
        self.quantidade_fisica.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateInventory<'a> {
    pub data_inventario: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedItem {
    pub id: i64,
    pub ingrediente_id: i64,
    pub ingrediente_nome: String,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub quantidade_sistema: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryGenerated {
    pub message: String,
    pub data_inventario: String,
    pub total_itens: u32,
    #[serde(default)]
    pub itens: Vec<GeneratedItem>,
}

/// Physical count entry for one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryCount {
    pub quantidade_fisica: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    /// Move the ingredient's stock to the counted quantity
    pub ajustar_estoque: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryCounted {
    pub message: String,
    pub quantidade_sistema: f64,
    pub quantidade_fisica: f64,
    pub diferenca: f64,
    pub estoque_ajustado: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryClosed {
    pub message: String,
    pub data_inventario: String,
    pub itens_fechados: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryReopened {
    pub message: String,
    pub data_inventario: String,
    pub itens_reabertos: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryReportItem {
    #[serde(flatten)]
    pub item: InventoryItem,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub custo_unitario: f64,
    #[serde(default)]
    pub valor_diferenca: Option<f64>,
}

/// Differences of one closed run, valued at unit cost
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryReport {
    pub data_inventario: String,
    pub total_itens: u32,
    pub itens_com_diferenca: u32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub valor_total_diferencas: f64,
    #[serde(default)]
    pub itens: Vec<InventoryReportItem>,
}

/// Filters for `GET /inventario`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryQuery {
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
    pub ingrediente_id: Option<i64>,
}

impl InventoryQuery {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "data_inicio", &self.data_inicio);
        push_opt(&mut pairs, "data_fim", &self.data_fim);
        push_opt(&mut pairs, "ingrediente_id", &self.ingrediente_id);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncounted_item() {
        let row = r#"{"id": 1, "data_inventario": "2024-03-01", "ingrediente_id": 2,
                      "ingrediente_nome": "Açúcar", "unidade_medida": "kg",
                      "quantidade_sistema": 10, "quantidade_fisica": null, "diferenca": null,
                      "observacoes": null, "editavel": 1, "usuario_id": 1, "usuario_nome": "Ana"}"#;
        let item: InventoryItem = serde_json::from_str(row).unwrap();
        assert!(!item.is_counted());
        assert!(item.editavel);
    }

    #[test]
    fn test_report_rows_flatten_item_fields() {
        let body = r#"{
            "data_inventario": "2024-03-01", "total_itens": 1, "itens_com_diferenca": 1,
            "valor_total_diferencas": 2.25,
            "itens": [{"id": 1, "data_inventario": "2024-03-01", "ingrediente_id": 2,
                       "ingrediente_nome": "Açúcar", "unidade_medida": "kg",
                       "quantidade_sistema": 10, "quantidade_fisica": 9.5, "diferenca": -0.5,
                       "editavel": 0, "custo_unitario": 4.5, "valor_diferenca": -0.00225}]
        }"#;
        let report: InventoryReport = serde_json::from_str(body).unwrap();
        let row = &report.itens[0];
        assert!(row.item.is_counted());
        assert!(!row.item.editavel);
        assert_eq!(row.item.diferenca, Some(-0.5));
        assert_eq!(row.custo_unitario, 4.5);
    }

    #[test]
    fn test_count_body_omits_missing_notes() {
        let body = serde_json::to_value(InventoryCount {
            quantidade_fisica: 3.0,
            observacoes: None,
            ajustar_estoque: true,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"quantidade_fisica": 3.0, "ajustar_estoque": true})
        );
    }

    #[test]
    fn test_query_with_ingredient() {
        let q = InventoryQuery {
            data_inicio: Some("2024-03-01".to_string()),
            data_fim: None,
            ingrediente_id: Some(7),
        };
        assert_eq!(
            q.to_query(),
            vec![
                ("data_inicio", "2024-03-01".to_string()),
                ("ingrediente_id", "7".to_string())
            ]
        );
    }
}
