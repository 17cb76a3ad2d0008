//! Confirmation gating for destructive actions

use std::future::Future;

/// Yes/no prompt shown before an irreversible action
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Actions that must be confirmed first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destructive {
    Logout,
    DeleteIngredient,
    DeleteRecipe,
    DeleteMenu,
    CloseInventory,
}

impl Destructive {
    pub fn prompt(&self) -> &'static str {
        match self {
            Destructive::Logout => "Deseja realmente sair?",
            Destructive::DeleteIngredient => "Deseja realmente excluir este ingrediente?",
            Destructive::DeleteRecipe => "Deseja realmente excluir esta ficha técnica?",
            Destructive::DeleteMenu => "Deseja realmente excluir este cardápio?",
            Destructive::CloseInventory => {
                "Deseja fechar este inventário? Os itens não poderão mais ser editados."
            }
        }
    }
}

/// Run `op` only if the user accepts the prompt for `action`
pub async fn confirm_then<C, F, Fut, T>(confirm: &C, action: Destructive, op: F) -> Option<T>
where
    C: Confirm + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    if !confirm.confirm(action.prompt()) {
        tracing::debug!(?action, "Declined");
        return None;
    }
    Some(op().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct Scripted {
        answer: bool,
        asked: RefCell<Vec<String>>,
    }

    impl Confirm for Scripted {
        fn confirm(&self, prompt: &str) -> bool {
            self.asked.borrow_mut().push(prompt.to_string());
            self.answer
        }
    }

    fn scripted(answer: bool) -> Scripted {
        Scripted {
            answer,
            asked: RefCell::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn test_declined_never_runs() {
        let confirm = scripted(false);
        let ran = Cell::new(false);

        let out = confirm_then(&confirm, Destructive::DeleteIngredient, || async {
            ran.set(true);
        })
        .await;

        assert!(out.is_none());
        assert!(!ran.get());
        assert_eq!(
            confirm.asked.borrow().as_slice(),
            ["Deseja realmente excluir este ingrediente?"]
        );
    }

    #[tokio::test]
    async fn test_accepted_runs_once() {
        let confirm = scripted(true);
        let out = confirm_then(&confirm, Destructive::Logout, || async { 5 }).await;
        assert_eq!(out, Some(5));
        assert_eq!(confirm.asked.borrow()[0], "Deseja realmente sair?");
    }

    #[tokio::test]
    async fn test_logout_gated_through_client() {
        use crate::client::testing::signed_in;

        let h = signed_in();
        let confirm = scripted(false);
        confirm_then(&confirm, Destructive::Logout, || async {
            h.client.auth().logout();
        })
        .await;
        assert!(h.client.session().is_authenticated());

        let confirm = scripted(true);
        confirm_then(&confirm, Destructive::Logout, || async {
            h.client.auth().logout();
        })
        .await;
        assert!(!h.client.session().is_authenticated());
        assert_eq!(h.navigator.logins.get(), 1);
    }
}
