use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::brazilian_format;

/// One expense line as delivered by a data source.
///
/// Records are immutable snapshots; processing stages only derive new
/// collections from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub cost_center: String,
    /// Day/month/year text, e.g. "15/01/2024".
    pub date: String,
    pub financial_plan: String,
    pub amount: Decimal,
    /// Only present for records of the excluded dataset.
    pub creditor: Option<String>,
}

impl FinancialRecord {
    /// Parsed calendar date, or `None` when the textual date is malformed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        brazilian_format::parse_br_date(&self.date)
    }
}

/// Total for one financial plan after grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRow {
    pub label: String,
    pub total: Decimal,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: Decimal,
}

impl From<AggregatedRow> for ChartPoint {
    fn from(row: AggregatedRow) -> Self {
        ChartPoint {
            name: row.label,
            value: row.total,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: Decimal,
    pub record_count: usize,
    pub by_cost_center: BTreeMap<String, Decimal>,
}
