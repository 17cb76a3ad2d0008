//! Session context

use serde::{Deserialize, Serialize};
use std::rc::Rc;

use super::store::{SessionError, SessionStorage};
use crate::config::SessionConfig;

/// Logged-in user as returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nome: String,
    pub email: String,
    #[serde(default = "default_perfil")]
    pub perfil: String,
}

fn default_perfil() -> String {
    "usuario".to_string()
}

/// Bearer token plus the user it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Explicit session context shared by the API client and the shell
///
/// Token and user live under independent keys. A session exists only when
/// both are present; either one alone counts as signed out.
#[derive(Clone)]
pub struct SessionContext {
    storage: Rc<dyn SessionStorage>,
    token_key: String,
    user_key: String,
}

impl SessionContext {
    pub fn new(storage: Rc<dyn SessionStorage>, config: &SessionConfig) -> Self {
        Self {
            storage,
            token_key: config.token_key.clone(),
            user_key: config.user_key.clone(),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(&self.token_key).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.storage.set(&self.token_key, token)
    }

    pub fn remove_token(&self) {
        self.storage.remove(&self.token_key);
    }

    /// Stored user, or `None` if absent or unreadable
    pub fn user(&self) -> Option<User> {
        let raw = self.storage.get(&self.user_key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable stored user");
                None
            }
        }
    }

    pub fn set_user(&self, user: &User) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user)?;
        self.storage.set(&self.user_key, &raw)
    }

    pub fn remove_user(&self) {
        self.storage.remove(&self.user_key);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.user().is_some()
    }

    pub fn current(&self) -> Option<Session> {
        Some(Session {
            token: self.token()?,
            user: self.user()?,
        })
    }

    /// Restore the persisted session on load
    pub fn init(&self) -> Option<Session> {
        let session = self.current();
        match &session {
            Some(s) => tracing::info!(user = %s.user.email, "Session restored"),
            None => tracing::debug!("No stored session"),
        }
        session
    }

    /// Persist a freshly issued session
    pub fn establish(&self, session: &Session) -> Result<(), SessionError> {
        self.set_token(&session.token)?;
        if let Err(e) = self.set_user(&session.user) {
            self.remove_token();
            return Err(e);
        }
        tracing::info!(user = %session.user.email, "Session established");
        Ok(())
    }

    /// Drop both entries (logout or unauthorized response)
    pub fn teardown(&self) {
        self.remove_token();
        self.remove_user();
        tracing::info!("Session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;

    fn context() -> (Rc<MemoryStorage>, SessionContext) {
        let storage = Rc::new(MemoryStorage::default());
        let ctx = SessionContext::new(storage.clone(), &SessionConfig::default());
        (storage, ctx)
    }

    fn ana() -> User {
        User {
            id: Some(1),
            nome: "Ana".to_string(),
            email: "ana@silvess.com".to_string(),
            perfil: "admin".to_string(),
        }
    }

    #[test]
    fn test_authenticated_needs_both_entries() {
        let (_, ctx) = context();
        assert!(!ctx.is_authenticated());

        ctx.set_token("abc").unwrap();
        assert!(!ctx.is_authenticated());

        ctx.set_user(&ana()).unwrap();
        assert!(ctx.is_authenticated());

        ctx.remove_token();
        assert!(!ctx.is_authenticated());
        assert!(ctx.user().is_some());
    }

    #[test]
    fn test_user_without_token_is_signed_out() {
        let (_, ctx) = context();
        ctx.set_user(&ana()).unwrap();
        assert!(!ctx.is_authenticated());
        assert!(ctx.current().is_none());
    }

    #[test]
    fn test_unreadable_user_is_signed_out() {
        let (storage, ctx) = context();
        ctx.set_token("abc").unwrap();
        storage.set("silvess_user", "{not json").unwrap();
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn test_establish_and_teardown() {
        let (storage, ctx) = context();
        let session = Session {
            token: "tok".to_string(),
            user: ana(),
        };

        ctx.establish(&session).unwrap();
        assert_eq!(ctx.init(), Some(session));
        assert_eq!(storage.len(), 2);

        ctx.teardown();
        assert!(storage.is_empty());
        assert!(ctx.init().is_none());
    }

    #[test]
    fn test_keys_follow_config() {
        let storage = Rc::new(MemoryStorage::default());
        let config = SessionConfig {
            token_key: "t".to_string(),
            user_key: "u".to_string(),
            ..SessionConfig::default()
        };
        let ctx = SessionContext::new(storage.clone(), &config);
        ctx.set_token("abc").unwrap();
        assert_eq!(storage.get("t").as_deref(), Some("abc"));
        assert!(storage.get("silvess_token").is_none());
    }

    #[test]
    fn test_user_roundtrip_keeps_profile_default() {
        let (storage, ctx) = context();
        storage
            .set("silvess_user", r#"{"nome":"Rui","email":"rui@x.com"}"#)
            .unwrap();
        let user = ctx.user().unwrap();
        assert_eq!(user.perfil, "usuario");
        assert_eq!(user.id, None);
    }
}
