use shared::utils::brazilian_format;

use super::date_filter::DateRange;

/// "DD/MM/YYYY a DD/MM/YYYY" for a closed range, `whole_period_label` otherwise.
pub fn period_label(range: &DateRange, whole_period_label: &str) -> String {
    match (range.start, range.end) {
        (Some(start), Some(end)) => format!(
            "{} a {}",
            brazilian_format::format_br_date(start),
            brazilian_format::format_br_date(end)
        ),
        _ => whole_period_label.to_string(),
    }
}

pub fn format_period_label(start: &str, end: &str, whole_period_label: &str) -> String {
    period_label(&DateRange::from_iso(start, end), whole_period_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_range() {
        assert_eq!(
            format_period_label("2024-01-01", "2024-01-31", "Todo o Período"),
            "01/01/2024 a 31/01/2024"
        );
    }

    #[test]
    fn test_missing_side_is_whole_period() {
        assert_eq!(format_period_label("", "", "Todo o Período"), "Todo o Período");
        assert_eq!(format_period_label("2024-01-01", "", "Todo o Período"), "Todo o Período");
    }
}
