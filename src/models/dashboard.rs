use serde::Deserialize;

use super::{flexible_bool, zero_if_null};

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct TotalCount {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct TotalValue {
    #[serde(default)]
    pub total: u64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub valor_total: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct IngredientCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub estoque_baixo: u64,
}

/// Headline counters for the stat cards
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    pub ingredientes: IngredientCounts,
    pub fichas_tecnicas: TotalCount,
    pub mesas: TotalCount,
    pub cardapios: TotalCount,
    pub vendas_mes: TotalValue,
    pub vendas_hoje: TotalValue,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportPeriod {
    pub data_inicio: String,
    pub data_fim: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SalesTotals {
    #[serde(default)]
    pub total_vendas: u64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub valor_total: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub ticket_medio: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DishSales {
    pub nome_prato: String,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub quantidade_total: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub valor_total: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailySales {
    pub data: String,
    #[serde(default)]
    pub total_vendas: u64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub valor_total: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategorySales {
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub total_vendas: u64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub valor_total: f64,
}

/// Sales aggregated over a date range
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesReport {
    pub periodo: ReportPeriod,
    #[serde(default)]
    pub totais: SalesTotals,
    #[serde(default)]
    pub vendas_por_prato: Vec<DishSales>,
    #[serde(default)]
    pub vendas_por_dia: Vec<DailySales>,
    #[serde(default)]
    pub vendas_por_categoria: Vec<CategorySales>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockReportStatus {
    Critico,
    Baixo,
    Normal,
}

impl StockReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockReportStatus::Critico => "Crítico",
            StockReportStatus::Baixo => "Baixo",
            StockReportStatus::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockReportItem {
    pub id: i64,
    pub nome: String,
    pub unidade_medida: String,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub custo_unitario: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub estoque_atual: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub estoque_minimo: f64,
    #[serde(default)]
    pub fornecedor: Option<String>,
    #[serde(with = "flexible_bool", default = "flexible_bool::default_true")]
    pub ativo: bool,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub valor_estoque: f64,
    pub status_estoque: StockReportStatus,
}

/// Valued stock position with critical/low counts
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockReport {
    pub total_ingredientes: u64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub valor_total_estoque: f64,
    #[serde(default)]
    pub criticos: u64,
    #[serde(default)]
    pub baixos: u64,
    #[serde(default)]
    pub ingredientes: Vec<StockReportItem>,
}
