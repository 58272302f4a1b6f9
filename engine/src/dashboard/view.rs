// View models: what a table or chart widget needs, nothing about how it draws
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{ChartPoint, Summary};
use shared::utils::brazilian_format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellFormat {
    Currency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub header: String,
    pub accessor: &'static str,
    pub format: Option<CellFormat>,
}

impl Column {
    pub fn text(header: impl Into<String>, accessor: &'static str) -> Self {
        Self {
            header: header.into(),
            accessor,
            format: None,
        }
    }

    pub fn currency(header: impl Into<String>, accessor: &'static str) -> Self {
        Self {
            header: header.into(),
            accessor,
            format: Some(CellFormat::Currency),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Amount(Decimal),
}

impl CellValue {
    pub fn display(&self, format: Option<CellFormat>) -> String {
        match (self, format) {
            (CellValue::Amount(value), Some(CellFormat::Currency)) => brazilian_format::format_currency(*value),
            (CellValue::Amount(value), None) => value.to_string(),
            (CellValue::Text(text), _) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: BTreeMap<&'static str, CellValue>,
    pub highlight: bool,
}

impl TableRow {
    pub fn with(mut self, accessor: &'static str, value: CellValue) -> Self {
        self.cells.insert(accessor, value);
        self
    }

    pub fn cell(&self, accessor: &str) -> Option<&CellValue> {
        self.cells.get(accessor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<Column>,
    pub rows: Vec<TableRow>,
}

impl TableView {
    /// Row cells rendered through their column formatters, in column order.
    pub fn formatted_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| {
                        row.cell(column.accessor)
                            .map(|value| value.display(column.format))
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }
}

/// Cost-center selector offered by the operational chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCenterFilter {
    #[default]
    All,
    CostCenter(String),
}

impl CostCenterFilter {
    pub fn as_code(&self) -> Option<&str> {
        match self {
            CostCenterFilter::All => None,
            CostCenterFilter::CostCenter(code) => Some(code.as_str()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            CostCenterFilter::All => "Soma de Todos".to_string(),
            CostCenterFilter::CostCenter(code) => format!("CC {}", code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub title: String,
    pub points: Vec<ChartPoint>,
    /// `Some` when the chart offers a cost-center selector; changes come back
    /// as `DashboardEvent::SetChartFilter`.
    pub cost_center_filter: Option<CostCenterFilter>,
    pub cost_center_options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewModel {
    Table(TableView),
    Chart(ChartView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub title: String,
    pub period: String,
    pub summary: Summary,
}
