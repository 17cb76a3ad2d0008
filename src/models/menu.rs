use serde::{Deserialize, Serialize};

use super::{flexible_bool, push_opt, zero_if_null};

/// Dated menu (cardápio)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Menu {
    pub id: i64,
    pub data: String,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(with = "flexible_bool", default = "flexible_bool::default_true")]
    pub ativo: bool,
    /// Only present on the detail endpoint
    #[serde(default)]
    pub pratos: Vec<MenuDish>,
}

impl Menu {
    pub fn available_dishes(&self) -> usize {
        self.pratos.iter().filter(|p| p.disponivel).count()
    }
}

/// Dish slot of a menu; `id` is the slot, `ficha_id` the recipe
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuDish {
    pub id: i64,
    #[serde(with = "flexible_bool", default = "flexible_bool::default_true")]
    pub disponivel: bool,
    #[serde(default)]
    pub ordem: i64,
    pub ficha_id: i64,
    pub nome_prato: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub preco_venda: f64,
    #[serde(default)]
    pub tempo_preparo: Option<i64>,
    #[serde(default)]
    pub porcoes: Option<i64>,
}

/// Create/update body. On update the dish list replaces the stored one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMenu {
    pub data: String,
    pub nome: String,
    pub descricao: String,
    pub ativo: bool,
    pub pratos: Vec<NewMenuDish>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMenuDish {
    pub ficha_tecnica_id: i64,
    pub disponivel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordem: Option<i64>,
}

impl NewMenuDish {
    pub fn recipe(ficha_tecnica_id: i64) -> Self {
        Self {
            ficha_tecnica_id,
            disponivel: true,
            ordem: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct DishAvailability {
    pub disponivel: bool,
}

/// Filters for `GET /cardapio`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuQuery {
    pub ativo: Option<bool>,
    pub data: Option<String>,
}

impl MenuQuery {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "ativo", &self.ativo.map(u8::from));
        push_opt(&mut pairs, "data", &self.data);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_counts_available_dishes() {
        let body = r#"{
            "id": 1, "data": "2024-03-05", "nome": "Almoço", "descricao": "", "ativo": 1,
            "pratos": [
                {"id": 10, "disponivel": 1, "ordem": 0, "ficha_id": 2, "nome_prato": "Risoto",
                 "descricao": null, "categoria": "Principal", "preco_venda": 52, "tempo_preparo": 40, "porcoes": 4},
                {"id": 11, "disponivel": 0, "ordem": 1, "ficha_id": 5, "nome_prato": "Pudim",
                 "descricao": null, "categoria": "Sobremesa", "preco_venda": 14, "tempo_preparo": null, "porcoes": 1}
            ]
        }"#;
        let menu: Menu = serde_json::from_str(body).unwrap();
        assert_eq!(menu.pratos.len(), 2);
        assert_eq!(menu.available_dishes(), 1);
        assert_eq!(menu.pratos[1].ficha_id, 5);
    }

    #[test]
    fn test_new_menu_body() {
        let body = serde_json::to_value(NewMenu {
            data: "2024-03-05".to_string(),
            nome: "Jantar".to_string(),
            descricao: String::new(),
            ativo: true,
            pratos: vec![NewMenuDish::recipe(2)],
        })
        .unwrap();
        assert_eq!(body["pratos"][0], serde_json::json!({"ficha_tecnica_id": 2, "disponivel": true}));
    }

    #[test]
    fn test_query_active_flag_is_numeric() {
        let q = MenuQuery {
            ativo: Some(true),
            data: Some("2024-03-05".to_string()),
        };
        assert_eq!(
            q.to_query(),
            vec![("ativo", "1".to_string()), ("data", "2024-03-05".to_string())]
        );
    }
}
