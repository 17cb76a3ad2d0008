//! `localStorage` session backend

use silvess::session::{SessionError, SessionStorage};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// None when the browser denies storage (private mode, sandboxed frame)
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SessionError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silvess::config::SessionConfig;
    use silvess::session::{Session, SessionContext, User};
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn config(prefix: &str) -> SessionConfig {
        SessionConfig {
            token_key: format!("{}_token", prefix),
            user_key: format!("{}_user", prefix),
            api_url_key: format!("{}_api_url", prefix),
        }
    }

    #[wasm_bindgen_test]
    fn test_set_get_remove() {
        let storage = LocalStorage::open().unwrap();
        storage.set("silvess_test_key", "valor").unwrap();
        assert_eq!(storage.get("silvess_test_key").as_deref(), Some("valor"));

        storage.remove("silvess_test_key");
        assert_eq!(storage.get("silvess_test_key"), None);
    }

    #[wasm_bindgen_test]
    fn test_session_survives_reopen() {
        let cfg = config("silvess_reopen");
        let session = SessionContext::new(Rc::new(LocalStorage::open().unwrap()), &cfg);
        session
            .establish(&Session {
                token: "jwt-abc".to_string(),
                user: User {
                    id: Some(1),
                    nome: "Administrador".to_string(),
                    email: "admin@silvess.com".to_string(),
                    perfil: "admin".to_string(),
                },
            })
            .unwrap();

        let reopened = SessionContext::new(Rc::new(LocalStorage::open().unwrap()), &cfg);
        let restored = reopened.init().unwrap();
        assert_eq!(restored.token, "jwt-abc");
        assert_eq!(restored.user.nome, "Administrador");

        reopened.teardown();
        assert!(!session.is_authenticated());
    }

    #[wasm_bindgen_test]
    fn test_token_alone_is_signed_out() {
        let cfg = config("silvess_partial");
        let storage = LocalStorage::open().unwrap();
        storage.set(&cfg.token_key, "jwt-abc").unwrap();

        let session = SessionContext::new(Rc::new(storage), &cfg);
        assert!(session.init().is_none());
        session.teardown();
    }
}
