use serde::{Deserialize, Serialize};

use super::{flexible_bool, push_opt, zero_if_null};

/// Stock level relative to the ingredient's minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Low,
    Ok,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub nome: String,
    pub unidade_medida: String,
    pub custo_unitario: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub estoque_atual: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub estoque_minimo: f64,
    #[serde(default)]
    pub fornecedor: Option<String>,
    #[serde(with = "flexible_bool", default = "flexible_bool::default_true")]
    pub ativo: bool,
}

impl Ingredient {
    /// `Low` when the current stock is at or below the minimum
    pub fn stock_status(&self) -> StockStatus {
        if self.estoque_atual <= self.estoque_minimo {
            StockStatus::Low
        } else {
            StockStatus::Ok
        }
    }

    pub fn needs_restock(&self) -> bool {
        self.stock_status() == StockStatus::Low
    }
}

/// Create/update body; absent stock figures default to zero server-side
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewIngredient {
    pub nome: String,
    pub unidade_medida: String,
    pub custo_unitario: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estoque_atual: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estoque_minimo: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fornecedor: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Entrada,
    Saida,
}

impl MovementKind {
    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Entrada => "Entrada",
            MovementKind::Saida => "Saída",
        }
    }
}

/// Stock entry or exit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockMovement {
    pub tipo: MovementKind,
    pub quantidade: f64,
    pub observacao: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockAdjusted {
    pub message: String,
    pub estoque_anterior: f64,
    pub estoque_atual: f64,
}

/// Filters for `GET /ingredientes`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientQuery {
    pub search: Option<String>,
    pub ativo: Option<bool>,
}

impl IngredientQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "search", &self.search);
        push_opt(&mut pairs, "ativo", &self.ativo.map(u8::from));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(atual: f64, minimo: f64) -> Ingredient {
        Ingredient {
            id: 1,
            nome: "Farinha".to_string(),
            unidade_medida: "kg".to_string(),
            custo_unitario: 4.5,
            estoque_atual: atual,
            estoque_minimo: minimo,
            fornecedor: None,
            ativo: true,
        }
    }

    #[test]
    fn test_stock_status_boundary() {
        assert_eq!(ingredient(5.0, 5.0).stock_status(), StockStatus::Low);
        assert_eq!(ingredient(4.9, 5.0).stock_status(), StockStatus::Low);
        assert_eq!(ingredient(5.1, 5.0).stock_status(), StockStatus::Ok);
        assert!(ingredient(0.0, 0.0).needs_restock());
    }

    #[test]
    fn test_decode_sqlite_row() {
        let row = r#"{"id": 4, "nome": "Leite", "unidade_medida": "L", "custo_unitario": 5.2,
                      "estoque_atual": 12, "estoque_minimo": 3, "fornecedor": null,
                      "ativo": 1, "criado_em": "2024-03-01 10:00:00"}"#;
        let ing: Ingredient = serde_json::from_str(row).unwrap();
        assert!(ing.ativo);
        assert_eq!(ing.estoque_atual, 12.0);
        assert_eq!(ing.stock_status(), StockStatus::Ok);
    }

    #[test]
    fn test_null_stock_reads_as_zero() {
        let row = r#"{"id": 5, "nome": "Sal", "unidade_medida": "kg", "custo_unitario": 2.0,
                      "estoque_atual": 12, "estoque_minimo": null, "ativo": 1}"#;
        let ing: Ingredient = serde_json::from_str(row).unwrap();
        assert_eq!(ing.estoque_minimo, 0.0);
        assert_eq!(ing.stock_status(), StockStatus::Ok);

        let row = r#"{"id": 6, "nome": "Açúcar", "unidade_medida": "kg", "custo_unitario": 3.0,
                      "estoque_atual": null, "estoque_minimo": null, "ativo": 1}"#;
        let ing: Ingredient = serde_json::from_str(row).unwrap();
        assert!(ing.needs_restock());
    }

    #[test]
    fn test_movement_body() {
        let body = serde_json::to_value(StockMovement {
            tipo: MovementKind::Saida,
            quantidade: 2.5,
            observacao: "Quebra".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"tipo": "saida", "quantidade": 2.5, "observacao": "Quebra"})
        );
    }

    #[test]
    fn test_query_pairs() {
        assert!(IngredientQuery::default().to_query().is_empty());

        let q = IngredientQuery {
            search: Some("arroz".to_string()),
            ativo: Some(false),
        };
        assert_eq!(
            q.to_query(),
            vec![("search", "arroz".to_string()), ("ativo", "0".to_string())]
        );
    }
}
