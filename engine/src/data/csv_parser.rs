use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use shared::models::FinancialRecord;
use shared::utils::brazilian_format;

use crate::error::{DashboardError, Result};

pub const COST_CENTER_HEADER: &str = "Centro de Custo";
pub const DATE_HEADER: &str = "Data";
pub const PLAN_HEADER: &str = "Plano Financeiro";
pub const AMOUNT_HEADER: &str = "Valor";
pub const CREDITOR_HEADER: &str = "Credor";

pub struct BrazilianCsvParser;

impl BrazilianCsvParser {
    // CSV Header: Centro de Custo;Data;Plano Financeiro;Valor[;Credor]
    // Example Row: 1000;15/01/2024;Aluguel;1.500,00;Imobiliária Centro
    pub fn load_records_from_csv(file_path: impl AsRef<Path>, delimiter: u8) -> Result<Vec<FinancialRecord>> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let records = Self::load_records_from_reader(BufReader::new(file), delimiter)?;
        tracing::debug!(path = %file_path.display(), count = records.len(), "Parsed financial records from CSV");
        Ok(records)
    }

    pub fn load_records_from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Vec<FinancialRecord>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut records = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2;
            let record = result?;

            let cost_center = Self::required_field(&record, &headers, COST_CENTER_HEADER, line)?;
            let date = Self::required_field(&record, &headers, DATE_HEADER, line)?;
            let financial_plan = Self::required_field(&record, &headers, PLAN_HEADER, line)?;
            let amount_str = Self::required_field(&record, &headers, AMOUNT_HEADER, line)?;

            let amount = brazilian_format::parse_decimal(amount_str).map_err(|e| {
                DashboardError::CsvDataFormatError(format!("Error parsing '{}' at line {}: {}", AMOUNT_HEADER, line, e))
            })?;

            let creditor = Self::get_field(&record, &headers, CREDITOR_HEADER)
                .filter(|value| !value.is_empty())
                .map(str::to_string);

            records.push(FinancialRecord {
                cost_center: cost_center.to_string(),
                date: date.to_string(),
                financial_plan: financial_plan.to_string(),
                amount,
                creditor,
            });
        }
        Ok(records)
    }

    fn required_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str, line: usize) -> Result<&'a str> {
        Self::get_field(record, headers, name).ok_or_else(|| {
            DashboardError::CsvDataFormatError(format!("Missing '{}' field in CSV record at line {}", name, line))
        })
    }

    // Looks a field up by header name so column order does not matter
    fn get_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| header == name)
            .and_then(|pos| record.get(pos))
    }
}
