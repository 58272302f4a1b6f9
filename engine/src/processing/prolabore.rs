// Director compensation ("pró-labore") lives in the excluded dataset and is
// folded back into the operational view as one aggregate line.
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::FinancialRecord;
use shared::utils::brazilian_format;

use super::date_filter::DateRange;
use crate::config::settings::ProlaboreSettings;

pub fn is_prolabore(financial_plan: &str, markers: &[String]) -> bool {
    let plan = financial_plan.to_lowercase();
    markers.iter().any(|marker| plan.contains(&marker.to_lowercase()))
}

pub fn prolabore_records<'a>(
    excluded: &'a [FinancialRecord],
    cost_center: &str,
    markers: &[String],
) -> Vec<&'a FinancialRecord> {
    excluded
        .iter()
        .filter(|record| record.cost_center == cost_center && is_prolabore(&record.financial_plan, markers))
        .collect()
}

pub fn sum_prolabore_for_period(excluded: &[FinancialRecord], cost_center: &str, markers: &[String]) -> Decimal {
    prolabore_records(excluded, cost_center, markers)
        .into_iter()
        .map(|record| record.amount)
        .sum()
}

/// The synthetic line injected into the operational dataset. Dated at the end
/// of the filter window, or `today` when the window is open-ended.
pub fn build_prolabore_record(
    settings: &ProlaboreSettings,
    total: Decimal,
    period_end: Option<NaiveDate>,
    today: NaiveDate,
) -> FinancialRecord {
    FinancialRecord {
        cost_center: settings.cost_center.clone(),
        date: brazilian_format::format_br_date(period_end.unwrap_or(today)),
        financial_plan: settings.aggregate_label.clone(),
        amount: total,
        creditor: None,
    }
}

/// Appends the pró-labore aggregate to already date-filtered operational
/// records. Nothing is appended unless the sum is strictly positive.
pub fn augment_operational(
    mut operational: Vec<FinancialRecord>,
    excluded: &[FinancialRecord],
    settings: &ProlaboreSettings,
    range: &DateRange,
    today: NaiveDate,
) -> Vec<FinancialRecord> {
    let total = sum_prolabore_for_period(excluded, &settings.cost_center, &settings.markers);
    tracing::debug!(cost_center = %settings.cost_center, %total, "Computed pró-labore sum");
    if total > Decimal::ZERO {
        operational.push(build_prolabore_record(settings, total, range.end, today));
    }
    operational
}
