// Brazilian number and date handling shared by the engine and any presentation layer.
pub mod brazilian_format {
    use std::str::FromStr;

    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;
    use rust_decimal::{Decimal, RoundingStrategy};

    // Parses decimals like "1.234,56", "-123,45" or "R$ 1.000,00" into a Decimal
    pub fn parse_decimal(s: &str) -> Result<Decimal> {
        let normalized = s
            .trim()
            .trim_start_matches("R$")
            .trim()
            .replace('.', "") // Remove thousand separators
            .replace(',', "."); // Replace decimal separator

        Decimal::from_str(&normalized).map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
    }

    /// Parses a record date. Accepts "dd/mm/yyyy" (optionally followed by a
    /// time component) and ISO "yyyy-mm-dd". Malformed input yields `None`.
    pub fn parse_br_date(s: &str) -> Option<NaiveDate> {
        let date_part = s.split_whitespace().next()?;
        NaiveDate::parse_from_str(date_part, "%d/%m/%Y")
            .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y-%m-%d"))
            .ok()
    }

    /// Parses an ISO "yyyy-mm-dd" filter boundary. Empty or malformed input yields `None`.
    pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
    }

    pub fn format_br_date(date: NaiveDate) -> String {
        date.format("%d/%m/%Y").to_string()
    }

    pub fn format_iso_date(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    // "R$ 1.234,56"; negatives get a leading minus sign
    pub fn format_currency(value: Decimal) -> String {
        let mut rounded = value
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        let plain = rounded.to_string();
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let digits: Vec<char> = int_part.chars().collect();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, digit) in digits.iter().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(*digit);
        }

        let sign = if value.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        format!("{}R$ {},{}", sign, grouped, frac_part)
    }

}
