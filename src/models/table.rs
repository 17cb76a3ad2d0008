use serde::{Deserialize, Serialize};

use super::flexible_bool;

/// Restaurant table (mesa) with its menu link and QR code
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Table {
    pub id: i64,
    pub numero: i64,
    #[serde(default)]
    pub qrcode_url: Option<String>,
    #[serde(default)]
    pub cardapio_id: Option<i64>,
    #[serde(with = "flexible_bool", default = "flexible_bool::default_true")]
    pub ativo: bool,
    #[serde(default)]
    pub cardapio_nome: Option<String>,
    #[serde(default)]
    pub cardapio_data: Option<String>,
}

impl Table {
    pub fn has_qr_code(&self) -> bool {
        self.qrcode_url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// Create/update body; the QR code is regenerated when a menu is linked
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewTable {
    pub numero: i64,
    pub cardapio_id: Option<i64>,
    pub ativo: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableSaved {
    pub message: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub qrcode_url: Option<String>,
}

/// QR code pointing at the table's menu page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableQrCode {
    pub mesa_numero: i64,
    pub cardapio_id: i64,
    pub qrcode_url: String,
}
