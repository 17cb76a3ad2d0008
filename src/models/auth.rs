use serde::{Deserialize, Serialize};

use crate::session::{Session, User};

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub senha: String,
}

/// Registration request body
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub perfil: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePassword {
    pub senha_atual: String,
    pub senha_nova: String,
}

/// Token issued by login or registration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
    pub user: User,
}

impl AuthResponse {
    pub fn into_session(self) -> Session {
        Session {
            token: self.token,
            user: self.user,
        }
    }
}

/// Profile of the authenticated user
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub perfil: String,
    #[serde(default)]
    pub criado_em: Option<String>,
}

impl From<CurrentUser> for User {
    fn from(u: CurrentUser) -> Self {
        User {
            id: Some(u.id),
            nome: u.nome,
            email: u.email,
            perfil: u.perfil,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_becomes_session() {
        let body = r#"{
            "message": "Login realizado com sucesso",
            "token": "jwt",
            "user": {"id": 3, "nome": "Bia", "email": "bia@silvess.com", "perfil": "admin"}
        }"#;
        let auth: AuthResponse = serde_json::from_str(body).unwrap();
        let session = auth.into_session();
        assert_eq!(session.token, "jwt");
        assert_eq!(session.user.id, Some(3));
        assert_eq!(session.user.perfil, "admin");
    }

    #[test]
    fn test_response_without_token_is_rejected() {
        let body = r#"{"message": "ok", "user": {"nome": "Bia", "email": "b@x.com"}}"#;
        assert!(serde_json::from_str::<AuthResponse>(body).is_err());
    }
}
