use crate::client::{ApiClient, ClientResult};
use crate::models::{AuthResponse, ChangePassword, Credentials, CurrentUser, MessageResponse, NewUser};

/// Login, registration and profile endpoints
pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token. The caller establishes the session.
    pub async fn login(&self, email: &str, senha: &str) -> ClientResult<AuthResponse> {
        let body = Credentials {
            email: email.to_string(),
            senha: senha.to_string(),
        };
        self.client.post("/auth/login", &body).await
    }

    pub async fn register(
        &self,
        nome: &str,
        email: &str,
        senha: &str,
        perfil: &str,
    ) -> ClientResult<AuthResponse> {
        let body = NewUser {
            nome: nome.to_string(),
            email: email.to_string(),
            senha: senha.to_string(),
            perfil: perfil.to_string(),
        };
        self.client.post("/auth/register", &body).await
    }

    pub async fn current_user(&self) -> ClientResult<CurrentUser> {
        self.client.get("/auth/me").await
    }

    pub async fn change_password(
        &self,
        senha_atual: &str,
        senha_nova: &str,
    ) -> ClientResult<MessageResponse> {
        let body = ChangePassword {
            senha_atual: senha_atual.to_string(),
            senha_nova: senha_nova.to_string(),
        };
        self.client.post("/auth/change-password", &body).await
    }

    /// Local only: drop the session and return to the login screen
    pub fn logout(&self) {
        self.client.session().teardown();
        self.client.navigator().to_login();
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::*;
    use crate::client::Method;

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let h = harness();
        h.transport.respond(
            200,
            r#"{"message": "ok", "token": "t1",
                "user": {"id": 1, "nome": "Ana", "email": "ana@silvess.com", "perfil": "admin"}}"#,
        );

        let auth = h.client.auth().login("ana@silvess.com", "segredo").await.unwrap();
        assert_eq!(auth.token, "t1");

        let req = h.transport.last();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "http://api.test/api/auth/login");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"email": "ana@silvess.com", "senha": "segredo"}));

        // Login alone does not persist anything
        assert!(!h.client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_register_sends_profile() {
        let h = harness();
        h.transport.respond(
            201,
            r#"{"message": "ok", "token": "t2",
                "user": {"id": 9, "nome": "Rui", "email": "rui@silvess.com", "perfil": "usuario"}}"#,
        );

        h.client
            .auth()
            .register("Rui", "rui@silvess.com", "123456", "usuario")
            .await
            .unwrap();

        let body: serde_json::Value =
            serde_json::from_str(h.transport.last().body.as_deref().unwrap()).unwrap();
        assert_eq!(body["perfil"], "usuario");
        assert_eq!(h.transport.last().url, "http://api.test/api/auth/register");
    }

    #[tokio::test]
    async fn test_current_user() {
        let h = signed_in();
        h.transport.respond(
            200,
            r#"{"id": 1, "nome": "Ana", "email": "ana@silvess.com", "perfil": "admin",
                "criado_em": "2024-01-01 00:00:00"}"#,
        );

        let me = h.client.auth().current_user().await.unwrap();
        assert_eq!(me.perfil, "admin");
        assert_eq!(h.transport.last().method, Method::Get);
    }

    #[tokio::test]
    async fn test_change_password_body() {
        let h = signed_in();
        h.transport.respond(200, r#"{"message": "Senha alterada com sucesso"}"#);

        let res = h.client.auth().change_password("old", "new").await.unwrap();
        assert_eq!(res.message, "Senha alterada com sucesso");

        let body: serde_json::Value =
            serde_json::from_str(h.transport.last().body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"senha_atual": "old", "senha_nova": "new"}));
    }

    #[test]
    fn test_logout_is_local() {
        let h = signed_in();
        h.client.auth().logout();

        assert!(h.transport.requests().is_empty());
        assert!(h.storage.is_empty());
        assert_eq!(h.navigator.logins.get(), 1);
    }
}
