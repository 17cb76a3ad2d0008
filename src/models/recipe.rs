use serde::{Deserialize, Serialize};

use super::{flexible_bool, push_opt, zero_if_null};

/// Technical sheet (ficha técnica) for one dish
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub nome_prato: String,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub porcoes: Option<i64>,
    #[serde(default)]
    pub tempo_preparo: Option<i64>,
    #[serde(default)]
    pub modo_preparo: Option<String>,
    #[serde(default)]
    pub validade_horas: Option<i64>,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub custo_total: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub preco_venda: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub margem_lucro: f64,
    #[serde(with = "flexible_bool", default = "flexible_bool::default_true")]
    pub ativo: bool,
    /// Only present on the detail endpoint
    #[serde(default)]
    pub ingredientes: Vec<RecipeIngredient>,
}

/// Ingredient line of a recipe detail
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeIngredient {
    pub id: i64,
    pub ingrediente_id: i64,
    pub ingrediente_nome: String,
    pub unidade_medida: String,
    pub quantidade_gramas: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub custo_parcial: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub custo_unitario: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewRecipe {
    pub nome_prato: String,
    pub categoria: String,
    pub descricao: String,
    pub porcoes: i64,
    pub tempo_preparo: i64,
    pub modo_preparo: String,
    pub validade_horas: i64,
    pub preco_venda: f64,
    pub ingredientes: Vec<NewRecipeIngredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecipeIngredient {
    pub ingrediente_id: i64,
    pub quantidade_gramas: f64,
}

/// Create acknowledgement with the cost the server computed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeCreated {
    pub message: String,
    pub id: i64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub custo_total: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub margem_lucro: f64,
}

/// Filters for `GET /fichas`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeQuery {
    pub categoria: Option<String>,
    pub search: Option<String>,
    pub ativo: Option<bool>,
}

impl RecipeQuery {
    pub fn category(categoria: impl Into<String>) -> Self {
        Self {
            categoria: Some(categoria.into()),
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "categoria", &self.categoria);
        push_opt(&mut pairs, "search", &self.search);
        push_opt(&mut pairs, "ativo", &self.ativo.map(u8::from));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_detail_with_lines() {
        let body = r#"{
            "id": 2, "nome_prato": "Risoto", "categoria": "Principal", "descricao": null,
            "porcoes": 4, "tempo_preparo": 40, "modo_preparo": "", "validade_horas": 24,
            "custo_total": 18.4, "preco_venda": 52.0, "margem_lucro": 182.6, "ativo": 1,
            "ingredientes": [
                {"id": 9, "quantidade_gramas": 320, "custo_parcial": 6.4, "ingrediente_id": 3,
                 "ingrediente_nome": "Arroz arbóreo", "unidade_medida": "kg", "custo_unitario": 20}
            ]
        }"#;
        let recipe: Recipe = serde_json::from_str(body).unwrap();
        assert_eq!(recipe.ingredientes.len(), 1);
        assert_eq!(recipe.ingredientes[0].ingrediente_nome, "Arroz arbóreo");
        assert_eq!(recipe.porcoes, Some(4));
        assert!(recipe.descricao.is_none());
    }

    #[test]
    fn test_list_row_without_lines() {
        let body = r#"{"id": 1, "nome_prato": "Salada", "custo_total": 5, "preco_venda": null,
                       "margem_lucro": null, "ativo": 1}"#;
        let recipe: Recipe = serde_json::from_str(body).unwrap();
        assert!(recipe.ingredientes.is_empty());
        assert_eq!(recipe.preco_venda, 0.0);
    }

    #[test]
    fn test_query_keeps_order() {
        let q = RecipeQuery {
            categoria: Some("Sobremesa".to_string()),
            search: Some("pudim".to_string()),
            ativo: None,
        };
        assert_eq!(
            q.to_query(),
            vec![
                ("categoria", "Sobremesa".to_string()),
                ("search", "pudim".to_string())
            ]
        );
    }
}
