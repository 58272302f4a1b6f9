use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::{AggregatedRow, FinancialRecord};

pub fn is_highlighted(label: &str, marker: &str) -> bool {
    label.to_lowercase().contains(&marker.to_lowercase())
}

/// Groups records by financial plan and sums their amounts, optionally
/// restricted to one cost center. Rows come back by descending total; equal
/// totals are ordered by label.
pub fn group_by_plan(records: &[FinancialRecord], cost_center: Option<&str>, highlight_marker: &str) -> Vec<AggregatedRow> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for record in records
        .iter()
        .filter(|record| cost_center.map_or(true, |cc| record.cost_center == cc))
    {
        *totals.entry(record.financial_plan.as_str()).or_insert(Decimal::ZERO) += record.amount;
    }

    let mut rows: Vec<AggregatedRow> = totals
        .into_iter()
        .map(|(label, total)| AggregatedRow {
            label: label.to_string(),
            total,
            highlight: is_highlighted(label, highlight_marker),
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.label.cmp(&b.label)));
    rows
}
