use rust_decimal::Decimal;
use shared::models::{FinancialRecord, Summary};

pub fn calculate_summary(records: &[FinancialRecord]) -> Summary {
    let mut summary = Summary::default();
    for record in records {
        summary.total += record.amount;
        summary.record_count += 1;
        *summary
            .by_cost_center
            .entry(record.cost_center.clone())
            .or_insert(Decimal::ZERO) += record.amount;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(cost_center: &str, amount: Decimal) -> FinancialRecord {
        FinancialRecord {
            cost_center: cost_center.to_string(),
            date: "01/01/2024".to_string(),
            financial_plan: "Aluguel".to_string(),
            amount,
            creditor: None,
        }
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let summary = calculate_summary(&[]);
        assert_eq!(summary.total, Decimal::ZERO);
        assert_eq!(summary.record_count, 0);
        assert!(summary.by_cost_center.is_empty());
    }

    #[test]
    fn test_signed_totals_per_cost_center() {
        let records = vec![
            record("1000", dec!(100.50)),
            record("2000", dec!(40)),
            record("1000", dec!(-20.25)),
        ];
        let summary = calculate_summary(&records);
        assert_eq!(summary.total, dec!(120.25));
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.by_cost_center["1000"], dec!(80.25));
        assert_eq!(summary.by_cost_center["2000"], dec!(40));
    }
}
