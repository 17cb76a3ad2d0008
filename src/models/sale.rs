use serde::{Deserialize, Serialize};

use super::{push_opt, zero_if_null};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(default)]
    pub mesa_id: Option<i64>,
    pub ficha_tecnica_id: i64,
    pub quantidade: i64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub valor_unitario: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub valor_total: f64,
    pub data_venda: String,
    pub nome_prato: String,
    #[serde(default)]
    pub mesa_numero: Option<i64>,
    #[serde(default)]
    pub usuario_nome: Option<String>,
}

/// Sale entry; the unit price comes from the recipe server-side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSale {
    pub ficha_tecnica_id: i64,
    pub quantidade: i64,
    pub mesa_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaleRecorded {
    pub message: String,
    pub id: i64,
    pub valor_total: f64,
}

/// Filters for `GET /dashboard/vendas`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesQuery {
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
    pub mesa_id: Option<i64>,
}

impl SalesQuery {
    pub fn between(inicio: impl Into<String>, fim: impl Into<String>) -> Self {
        Self {
            data_inicio: Some(inicio.into()),
            data_fim: Some(fim.into()),
            mesa_id: None,
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "data_inicio", &self.data_inicio);
        push_opt(&mut pairs, "data_fim", &self.data_fim);
        push_opt(&mut pairs, "mesa_id", &self.mesa_id);
        pairs
    }
}
