//! View models: records turned into display-ready cells

use std::collections::BTreeMap;

use crate::format::Formatter;
use crate::models::{
    DashboardStats, Ingredient, InventoryItem, Menu, Recipe, Sale, StockStatus, Table,
};
use crate::session::User;

/// A list region: either rows or an explicit "no records" message
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    Empty(&'static str),
    Rows(Vec<T>),
}

impl<T> ListView<T> {
    pub fn from_rows(rows: Vec<T>, empty_message: &'static str) -> Self {
        if rows.is_empty() {
            ListView::Empty(empty_message)
        } else {
            ListView::Rows(rows)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty(_))
    }

    pub fn rows(&self) -> &[T] {
        match self {
            ListView::Empty(_) => &[],
            ListView::Rows(rows) => rows,
        }
    }
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Low => "Baixo",
            StockStatus::Ok => "OK",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StockStatus::Low => "badge badge-danger",
            StockStatus::Ok => "badge badge-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRow {
    pub id: i64,
    pub nome: String,
    pub unidade: String,
    pub custo_unitario: String,
    pub estoque_atual: String,
    pub estoque_minimo: String,
    pub status: StockStatus,
}

impl IngredientRow {
    pub fn new(ing: &Ingredient, fmt: &Formatter) -> Self {
        Self {
            id: ing.id,
            nome: ing.nome.clone(),
            unidade: ing.unidade_medida.clone(),
            custo_unitario: fmt.currency(ing.custo_unitario),
            estoque_atual: fmt.quantity(ing.estoque_atual),
            estoque_minimo: fmt.quantity(ing.estoque_minimo),
            status: ing.stock_status(),
        }
    }

    pub fn list(items: &[Ingredient], fmt: &Formatter) -> ListView<Self> {
        ListView::from_rows(
            items.iter().map(|i| Self::new(i, fmt)).collect(),
            "Nenhum ingrediente cadastrado",
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRow {
    pub id: i64,
    pub prato: String,
    pub categoria: String,
    pub porcoes: String,
    pub custo_total: String,
    pub preco_venda: String,
    pub margem: String,
}

impl RecipeRow {
    pub fn new(recipe: &Recipe, fmt: &Formatter) -> Self {
        Self {
            id: recipe.id,
            prato: recipe.nome_prato.clone(),
            categoria: or_dash(recipe.categoria.as_deref()),
            porcoes: recipe
                .porcoes
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            custo_total: fmt.currency(recipe.custo_total),
            preco_venda: fmt.currency(recipe.preco_venda),
            margem: fmt.percent(recipe.margem_lucro),
        }
    }

    pub fn list(items: &[Recipe], fmt: &Formatter) -> ListView<Self> {
        ListView::from_rows(
            items.iter().map(|r| Self::new(r, fmt)).collect(),
            "Nenhuma ficha técnica cadastrada",
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub id: i64,
    pub ingrediente: String,
    pub unidade: String,
    pub sistema: String,
    pub fisica: String,
    pub diferenca: String,
    pub counted: bool,
    pub editavel: bool,
}

impl InventoryRow {
    pub fn new(item: &InventoryItem, fmt: &Formatter) -> Self {
        Self {
            id: item.id,
            ingrediente: item.ingrediente_nome.clone(),
            unidade: item.unidade_medida.clone(),
            sistema: fmt.quantity(item.quantidade_sistema),
            fisica: item
                .quantidade_fisica
                .map(|q| fmt.quantity(q))
                .unwrap_or_else(|| "-".to_string()),
            diferenca: item
                .diferenca
                .map(|d| fmt.quantity(d))
                .unwrap_or_else(|| "-".to_string()),
            counted: item.is_counted(),
            editavel: item.editavel,
        }
    }
}

/// All items sharing one inventory date
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRun {
    pub date: String,
    pub label: String,
    pub rows: Vec<InventoryRow>,
    pub counted: usize,
    /// False once the run has been closed
    pub open: bool,
}

impl InventoryRun {
    pub fn progress(&self) -> String {
        format!("{}/{} contados", self.counted, self.rows.len())
    }

    pub fn is_complete(&self) -> bool {
        self.counted == self.rows.len()
    }

    /// Group items by date, newest run first
    pub fn group(items: &[InventoryItem], fmt: &Formatter) -> ListView<Self> {
        let mut by_date: BTreeMap<&str, Vec<&InventoryItem>> = BTreeMap::new();
        for item in items {
            by_date.entry(item.data_inventario.as_str()).or_default().push(item);
        }

        let runs = by_date
            .into_iter()
            .rev()
            .map(|(date, items)| InventoryRun {
                date: date.to_string(),
                label: fmt.date(date),
                counted: items.iter().filter(|i| i.is_counted()).count(),
                open: items.iter().any(|i| i.editavel),
                rows: items.iter().map(|i| InventoryRow::new(i, fmt)).collect(),
            })
            .collect();

        ListView::from_rows(runs, "Nenhum inventário gerado")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    pub id: i64,
    pub data: String,
    pub nome: String,
    pub descricao: String,
    pub ativo: bool,
}

impl MenuRow {
    pub fn new(menu: &Menu, fmt: &Formatter) -> Self {
        Self {
            id: menu.id,
            data: fmt.date(&menu.data),
            nome: menu.nome.clone(),
            descricao: or_dash(menu.descricao.as_deref()),
            ativo: menu.ativo,
        }
    }

    pub fn list(items: &[Menu], fmt: &Formatter) -> ListView<Self> {
        ListView::from_rows(
            items.iter().map(|m| Self::new(m, fmt)).collect(),
            "Nenhum cardápio cadastrado",
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: i64,
    pub numero: String,
    pub cardapio: String,
    pub has_qr_code: bool,
}

impl TableRow {
    pub fn new(table: &Table, fmt: &Formatter) -> Self {
        let cardapio = match (&table.cardapio_nome, &table.cardapio_data) {
            (Some(nome), Some(data)) => format!("{} ({})", nome, fmt.date(data)),
            (Some(nome), None) => nome.clone(),
            _ => "Sem cardápio".to_string(),
        };
        Self {
            id: table.id,
            numero: format!("Mesa {}", table.numero),
            cardapio,
            has_qr_code: table.has_qr_code(),
        }
    }

    pub fn list(items: &[Table], fmt: &Formatter) -> ListView<Self> {
        ListView::from_rows(
            items.iter().map(|t| Self::new(t, fmt)).collect(),
            "Nenhuma mesa cadastrada",
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleRow {
    pub id: i64,
    pub data: String,
    pub prato: String,
    pub mesa: String,
    pub quantidade: String,
    pub valor_unitario: String,
    pub valor_total: String,
}

impl SaleRow {
    pub fn new(sale: &Sale, fmt: &Formatter) -> Self {
        Self {
            id: sale.id,
            data: fmt.date_time(&sale.data_venda),
            prato: sale.nome_prato.clone(),
            mesa: sale
                .mesa_numero
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            quantidade: sale.quantidade.to_string(),
            valor_unitario: fmt.currency(sale.valor_unitario),
            valor_total: fmt.currency(sale.valor_total),
        }
    }

    pub fn list(items: &[Sale], fmt: &Formatter) -> ListView<Self> {
        ListView::from_rows(
            items.iter().map(|s| Self::new(s, fmt)).collect(),
            "Nenhuma venda registrada",
        )
    }
}

/// Values for the header stat cards
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub ingredientes: String,
    pub estoque_baixo: String,
    pub fichas: String,
    pub vendas_hoje: String,
    pub vendas_hoje_qtd: String,
}

impl StatsSummary {
    pub fn new(stats: &DashboardStats, fmt: &Formatter) -> Self {
        Self {
            ingredientes: stats.ingredientes.total.to_string(),
            estoque_baixo: stats.ingredientes.estoque_baixo.to_string(),
            fichas: stats.fichas_tecnicas.total.to_string(),
            vendas_hoje: fmt.currency(stats.vendas_hoje.valor_total),
            vendas_hoje_qtd: format!("{} vendas", stats.vendas_hoje.total),
        }
    }

    /// Placeholder shown before the first load
    pub fn placeholder() -> Self {
        Self {
            ingredientes: "-".to_string(),
            estoque_baixo: "-".to_string(),
            fichas: "-".to_string(),
            vendas_hoje: "-".to_string(),
            vendas_hoje_qtd: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBadge {
    pub nome: String,
    pub email: String,
    pub initial: String,
}

impl UserBadge {
    pub fn new(user: &User) -> Self {
        Self {
            nome: user.nome.clone(),
            email: user.email.clone(),
            initial: user
                .nome
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default(),
        }
    }
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientCounts, TotalCount, TotalValue};

    fn ingredient(id: i64, atual: f64, minimo: f64) -> Ingredient {
        Ingredient {
            id,
            nome: format!("Item {}", id),
            unidade_medida: "kg".to_string(),
            custo_unitario: 1234.5,
            estoque_atual: atual,
            estoque_minimo: minimo,
            fornecedor: None,
            ativo: true,
        }
    }

    fn inventory_item(id: i64, date: &str, fisica: Option<f64>, editavel: bool) -> InventoryItem {
        InventoryItem {
            id,
            data_inventario: date.to_string(),
            ingrediente_id: id,
            ingrediente_nome: format!("Item {}", id),
            unidade_medida: "kg".to_string(),
            quantidade_sistema: 10.0,
            quantidade_fisica: fisica,
            diferenca: fisica.map(|f| f - 10.0),
            observacoes: None,
            editavel,
            usuario_nome: None,
        }
    }

    #[test]
    fn test_empty_list_has_message() {
        let view = IngredientRow::list(&[], &Formatter::default());
        assert_eq!(view, ListView::Empty("Nenhum ingrediente cadastrado"));
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_ingredient_row_badges() {
        let fmt = Formatter::default();
        let view = IngredientRow::list(&[ingredient(1, 5.0, 5.0), ingredient(2, 8.0, 5.0)], &fmt);
        let rows = view.rows();

        assert_eq!(rows[0].custo_unitario, "R$ 1.234,50");
        assert_eq!(rows[0].status.label(), "Baixo");
        assert_eq!(rows[0].status.badge_class(), "badge badge-danger");
        assert_eq!(rows[1].status.label(), "OK");
    }

    #[test]
    fn test_recipe_row_fills_blanks() {
        let recipe = Recipe {
            id: 1,
            nome_prato: "Salada".to_string(),
            categoria: Some(String::new()),
            descricao: None,
            porcoes: None,
            tempo_preparo: None,
            modo_preparo: None,
            validade_horas: None,
            custo_total: 4.0,
            preco_venda: 18.0,
            margem_lucro: 350.0,
            ativo: true,
            ingredientes: vec![],
        };
        let row = RecipeRow::new(&recipe, &Formatter::default());
        assert_eq!(row.categoria, "-");
        assert_eq!(row.porcoes, "-");
        assert_eq!(row.margem, "350.0%");
    }

    #[test]
    fn test_inventory_runs_grouped_newest_first() {
        let items = vec![
            inventory_item(1, "2024-02-01", Some(9.0), false),
            inventory_item(2, "2024-03-01", Some(10.0), true),
            inventory_item(3, "2024-03-01", None, true),
        ];
        let view = InventoryRun::group(&items, &Formatter::default());
        let runs = view.rows();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].date, "2024-03-01");
        assert_eq!(runs[0].label, "01/03/2024");
        assert_eq!(runs[0].progress(), "1/2 contados");
        assert!(runs[0].open);
        assert!(!runs[0].is_complete());
        assert_eq!(runs[0].rows[1].fisica, "-");

        assert!(!runs[1].open);
        assert!(runs[1].is_complete());
        assert_eq!(runs[1].rows[0].diferenca, "-1");
    }

    #[test]
    fn test_table_row_menu_label() {
        let table = Table {
            id: 1,
            numero: 4,
            qrcode_url: None,
            cardapio_id: Some(2),
            ativo: true,
            cardapio_nome: Some("Almoço".to_string()),
            cardapio_data: Some("2024-03-05".to_string()),
        };
        let row = TableRow::new(&table, &Formatter::default());
        assert_eq!(row.numero, "Mesa 4");
        assert_eq!(row.cardapio, "Almoço (05/03/2024)");
        assert!(!row.has_qr_code);
    }

    #[test]
    fn test_stats_summary() {
        let stats = DashboardStats {
            ingredientes: IngredientCounts {
                total: 42,
                estoque_baixo: 3,
            },
            fichas_tecnicas: TotalCount { total: 18 },
            mesas: TotalCount { total: 10 },
            cardapios: TotalCount { total: 2 },
            vendas_mes: TotalValue::default(),
            vendas_hoje: TotalValue {
                total: 5,
                valor_total: 250.0,
            },
        };
        let summary = StatsSummary::new(&stats, &Formatter::default());
        assert_eq!(summary.ingredientes, "42");
        assert_eq!(summary.estoque_baixo, "3");
        assert_eq!(summary.fichas, "18");
        assert_eq!(summary.vendas_hoje, "R$ 250,00");
        assert_eq!(summary.vendas_hoje_qtd, "5 vendas");
    }

    #[test]
    fn test_user_badge_initial() {
        let badge = UserBadge::new(&User {
            id: Some(1),
            nome: "élida".to_string(),
            email: "elida@silvess.com".to_string(),
            perfil: "usuario".to_string(),
        });
        assert_eq!(badge.initial, "É");

        let blank = UserBadge::new(&User {
            id: None,
            nome: String::new(),
            email: "x@y.z".to_string(),
            perfil: "usuario".to_string(),
        });
        assert_eq!(blank.initial, "");
    }
}
