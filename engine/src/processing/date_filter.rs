use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::FinancialRecord;
use shared::utils::brazilian_format;

/// Inclusive calendar range; a missing side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Builds a range from ISO "yyyy-mm-dd" boundaries. Empty strings are
    /// unbounded; malformed strings are treated the same way.
    pub fn from_iso(start: &str, end: &str) -> Self {
        Self {
            start: Self::parse_boundary(start, "start"),
            end: Self::parse_boundary(end, "end"),
        }
    }

    fn parse_boundary(value: &str, side: &str) -> Option<NaiveDate> {
        let parsed = brazilian_format::parse_iso_date(value);
        if parsed.is_none() && !value.trim().is_empty() {
            tracing::warn!(boundary = side, value = %value, "Ignoring malformed date boundary");
        }
        parsed
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }

    /// Smallest range covering every parseable record date, or `None` when no
    /// record has a valid date.
    pub fn spanning<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a FinancialRecord>,
    {
        let mut dates = records.into_iter().filter_map(FinancialRecord::parsed_date);
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(min, max), date| (min.min(date), max.max(date)));
        Some(Self::new(Some(min), Some(max)))
    }
}

/// Keeps the records whose date falls inside `range`. An unbounded range
/// returns every record, including those with unparseable dates.
pub fn filter_records(records: &[FinancialRecord], range: &DateRange) -> Vec<FinancialRecord> {
    if range.is_unbounded() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.parsed_date().is_some_and(|date| range.contains(date)))
        .cloned()
        .collect()
}

pub fn filter_by_date_range(records: &[FinancialRecord], start: &str, end: &str) -> Vec<FinancialRecord> {
    filter_records(records, &DateRange::from_iso(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dated(date: &str) -> FinancialRecord {
        FinancialRecord {
            cost_center: "1000".to_string(),
            date: date.to_string(),
            financial_plan: "Aluguel".to_string(),
            amount: dec!(100),
            creditor: None,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_includes_inside_and_excludes_outside() {
        let records = vec![dated("15/01/2024"), dated("01/02/2024")];
        let filtered = filter_by_date_range(&records, "2024-01-01", "2024-01-31");
        assert_eq!(filtered, vec![dated("15/01/2024")]);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let records = vec![dated("01/01/2024"), dated("31/01/2024"), dated("31/12/2023")];
        let filtered = filter_by_date_range(&records, "2024-01-01", "2024-01-31");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_empty_boundaries_are_identity() {
        let records = vec![dated("15/01/2024"), dated("sem data")];
        assert_eq!(filter_by_date_range(&records, "", ""), records);
    }

    #[test]
    fn test_single_boundary() {
        let records = vec![dated("15/01/2024"), dated("15/03/2024")];
        assert_eq!(filter_by_date_range(&records, "2024-02-01", ""), vec![dated("15/03/2024")]);
        assert_eq!(filter_by_date_range(&records, "", "2024-02-01"), vec![dated("15/01/2024")]);
    }

    #[test]
    fn test_unparseable_dates_excluded_when_bounded() {
        let records = vec![dated("31/02/2024"), dated("xx"), dated("10/01/2024")];
        let filtered = filter_by_date_range(&records, "2024-01-01", "");
        assert_eq!(filtered, vec![dated("10/01/2024")]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = vec![dated("15/01/2024"), dated("01/02/2024"), dated("bad"), dated("31/01/2024")];
        let once = filter_by_date_range(&records, "2024-01-01", "2024-01-31");
        let twice = filter_by_date_range(&once, "2024-01-01", "2024-01-31");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_malformed_boundary_is_unbounded() {
        let range = DateRange::from_iso("01/01/2024", "2024-01-31");
        assert_eq!(range, DateRange::new(None, Some(ymd(2024, 1, 31))));
    }

    #[test]
    fn test_spanning() {
        let records = vec![dated("15/03/2024"), dated("bad"), dated("02/01/2024"), dated("20/02/2024")];
        let range = DateRange::spanning(&records).unwrap();
        assert_eq!(range, DateRange::new(Some(ymd(2024, 1, 2)), Some(ymd(2024, 3, 15))));
        assert_eq!(DateRange::spanning(&[dated("bad")]), None);
    }
}
