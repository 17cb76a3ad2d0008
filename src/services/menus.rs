use crate::client::{ApiClient, ClientResult};
use crate::models::{Created, DishAvailability, Menu, MenuQuery, MessageResponse, NewMenu};

pub struct MenuService<'a> {
    client: &'a ApiClient,
}

impl<'a> MenuService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &MenuQuery) -> ClientResult<Vec<Menu>> {
        self.client
            .get_with_query("/cardapio", &query.to_query())
            .await
    }

    /// Menu with its dishes
    pub async fn get(&self, id: i64) -> ClientResult<Menu> {
        self.client.get(&format!("/cardapio/{}", id)).await
    }

    pub async fn create(&self, menu: &NewMenu) -> ClientResult<Created> {
        self.client.post("/cardapio", menu).await
    }

    pub async fn update(&self, id: i64, menu: &NewMenu) -> ClientResult<MessageResponse> {
        self.client.put(&format!("/cardapio/{}", id), menu).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<MessageResponse> {
        self.client.delete(&format!("/cardapio/{}", id)).await
    }

    /// `dish_id` is the menu slot id (`MenuDish::id`), not the recipe id
    pub async fn set_dish_availability(
        &self,
        menu_id: i64,
        dish_id: i64,
        disponivel: bool,
    ) -> ClientResult<MessageResponse> {
        self.client
            .put(
                &format!("/cardapio/{}/prato/{}/disponibilidade", menu_id, dish_id),
                &DishAvailability { disponivel },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::*;
    use crate::client::Method;
    use crate::models::{MenuQuery, NewMenu, NewMenuDish};

    #[tokio::test]
    async fn test_list_active() {
        let h = signed_in();
        h.transport.respond(
            200,
            r#"[{"id": 1, "data": "2024-03-05", "nome": "Almoço", "descricao": null, "ativo": 1}]"#,
        );

        let menus = h
            .client
            .menus()
            .list(&MenuQuery {
                ativo: Some(true),
                data: None,
            })
            .await
            .unwrap();

        assert_eq!(menus[0].nome, "Almoço");
        assert_eq!(h.transport.last().url, "http://api.test/api/cardapio?ativo=1");
    }

    #[tokio::test]
    async fn test_create_and_delete() {
        let h = signed_in();
        h.transport
            .respond(201, r#"{"message": "Cardápio criado com sucesso", "id": 4}"#);
        h.transport
            .respond(200, r#"{"message": "Cardápio desativado com sucesso"}"#);

        let menu = NewMenu {
            data: "2024-03-06".to_string(),
            nome: "Jantar".to_string(),
            descricao: String::new(),
            ativo: true,
            pratos: vec![NewMenuDish::recipe(2), NewMenuDish::recipe(5)],
        };
        let created = h.client.menus().create(&menu).await.unwrap();
        h.client.menus().delete(created.id).await.unwrap();

        let reqs = h.transport.requests();
        assert_eq!(reqs[0].url, "http://api.test/api/cardapio");
        assert_eq!(reqs[1].method, Method::Delete);
        assert_eq!(reqs[1].url, "http://api.test/api/cardapio/4");
    }

    #[tokio::test]
    async fn test_dish_availability() {
        let h = signed_in();
        h.transport
            .respond(200, r#"{"message": "Disponibilidade atualizada com sucesso"}"#);

        h.client
            .menus()
            .set_dish_availability(1, 11, false)
            .await
            .unwrap();

        let req = h.transport.last();
        assert_eq!(req.method, Method::Put);
        assert_eq!(
            req.url,
            "http://api.test/api/cardapio/1/prato/11/disponibilidade"
        );
        assert_eq!(req.body.as_deref(), Some(r#"{"disponivel":false}"#));
    }
}
