use crate::client::{ApiClient, ClientResult};
use crate::models::{NewTable, Table, TableQrCode, TableSaved};

pub struct TableService<'a> {
    client: &'a ApiClient,
}

impl<'a> TableService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Active tables ordered by number
    pub async fn list(&self) -> ClientResult<Vec<Table>> {
        self.client.get("/cardapio/mesas").await
    }

    pub async fn create(&self, table: &NewTable) -> ClientResult<TableSaved> {
        self.client.post("/cardapio/mesas", table).await
    }

    pub async fn update(&self, id: i64, table: &NewTable) -> ClientResult<TableSaved> {
        self.client
            .put(&format!("/cardapio/mesas/{}", id), table)
            .await
    }

    /// Fails with a 400 when the table has no menu linked
    pub async fn qr_code(&self, id: i64) -> ClientResult<TableQrCode> {
        self.client
            .get(&format!("/cardapio/mesas/{}/qrcode", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::*;
    use crate::client::Method;
    use crate::models::NewTable;

    #[tokio::test]
    async fn test_list_and_create() {
        let h = signed_in();
        h.transport.respond(200, "[]");
        h.transport.respond(
            201,
            r#"{"message": "Mesa criada com sucesso", "id": 3, "qrcode_url": "data:image/png;base64,AA"}"#,
        );

        assert!(h.client.tables().list().await.unwrap().is_empty());
        let saved = h
            .client
            .tables()
            .create(&NewTable {
                numero: 7,
                cardapio_id: Some(1),
                ativo: true,
            })
            .await
            .unwrap();
        assert_eq!(saved.id, Some(3));

        let reqs = h.transport.requests();
        assert_eq!(reqs[0].url, "http://api.test/api/cardapio/mesas");
        assert_eq!(reqs[1].method, Method::Post);
        let body: serde_json::Value = serde_json::from_str(reqs[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"numero": 7, "cardapio_id": 1, "ativo": true}));
    }

    #[tokio::test]
    async fn test_update_relinks_menu() {
        let h = signed_in();
        h.transport.respond(
            200,
            r#"{"message": "Mesa atualizada com sucesso", "qrcode_url": "data:image/png;base64,BB"}"#,
        );

        let saved = h
            .client
            .tables()
            .update(
                3,
                &NewTable {
                    numero: 7,
                    cardapio_id: Some(2),
                    ativo: true,
                },
            )
            .await
            .unwrap();

        assert!(saved.id.is_none());
        assert_eq!(h.transport.last().method, Method::Put);
        assert_eq!(h.transport.last().url, "http://api.test/api/cardapio/mesas/3");
    }

    #[tokio::test]
    async fn test_qr_code_without_menu() {
        let h = signed_in();
        h.transport
            .respond(400, r#"{"error": "Mesa não possui cardápio associado"}"#);

        let err = h.client.tables().qr_code(3).await.unwrap_err();
        assert_eq!(err.user_message(), "Mesa não possui cardápio associado");
    }
}
