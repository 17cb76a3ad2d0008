//! Transient notices (the dashboard's alert banners)

use crate::client::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Danger,
    Info,
    Warning,
}

impl NoticeKind {
    /// CSS modifier, `alert-<kind>`
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "alert-success",
            NoticeKind::Danger => "alert-danger",
            NoticeKind::Info => "alert-info",
            NoticeKind::Warning => "alert-warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "✓",
            NoticeKind::Danger => "✕",
            NoticeKind::Info => "ℹ",
            NoticeKind::Warning => "⚠",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Ordered queue of visible notices
#[derive(Debug, Clone, Default)]
pub struct Notices {
    items: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message)
    }

    pub fn danger(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Danger, message)
    }

    /// Danger notice for a failed call; cancelled loads stay silent
    pub fn error(&mut self, error: &ClientError) -> Option<u64> {
        if error.is_cancelled() {
            return None;
        }
        Some(self.danger(error.user_message()))
    }

    /// Returns false if the notice was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::TransportError;

    #[test]
    fn test_push_and_dismiss() {
        let mut notices = Notices::new();
        let a = notices.success("Dados atualizados!");
        let b = notices.push(NoticeKind::Info, "Carregando");
        assert_ne!(a, b);
        assert_eq!(notices.items().len(), 2);

        assert!(notices.dismiss(a));
        assert!(!notices.dismiss(a));
        assert_eq!(notices.items()[0].id, b);
    }

    #[test]
    fn test_cancelled_error_is_silent() {
        let mut notices = Notices::new();
        assert_eq!(notices.error(&ClientError::Cancelled), None);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_error_uses_user_message() {
        let mut notices = Notices::new();
        notices.error(&ClientError::Network(TransportError::Network("down".into())));
        let notice = &notices.items()[0];
        assert_eq!(notice.kind, NoticeKind::Danger);
        assert_eq!(notice.message, "Falha de conexão com o servidor");
        assert_eq!(notice.kind.css_class(), "alert-danger");
    }
}
