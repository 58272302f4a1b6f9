// Providers of raw financial records
use std::path::PathBuf;

use shared::models::FinancialRecord;

use super::csv_parser::BrazilianCsvParser;
use crate::error::Result;

// Common trait for anything that can hand over a record collection
pub trait RecordSource: Send + Sync {
    fn name(&self) -> &str;
    fn load(&self) -> Result<Vec<FinancialRecord>>;
}

pub struct CsvRecordSource {
    name: String,
    path: PathBuf,
    delimiter: u8,
}

impl CsvRecordSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            delimiter,
        }
    }
}

impl RecordSource for CsvRecordSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<FinancialRecord>> {
        tracing::info!(source = %self.name, path = %self.path.display(), "Loading records from CSV");
        BrazilianCsvParser::load_records_from_csv(&self.path, self.delimiter)
    }
}

/// Records already held in memory, e.g. handed over by an embedding application.
pub struct InMemoryRecordSource {
    name: String,
    records: Vec<FinancialRecord>,
}

impl InMemoryRecordSource {
    pub fn new(name: impl Into<String>, records: Vec<FinancialRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

impl RecordSource for InMemoryRecordSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<FinancialRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_source_loads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Centro de Custo,Data,Plano Financeiro,Valor\n2000,01/03/2024,Energia,\"310,20\"").unwrap();
        let source = CsvRecordSource::new("operacional", file.path(), b',');

        let records = source.load().unwrap();
        assert_eq!(source.name(), "operacional");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].financial_plan, "Energia");
    }

    #[test]
    fn test_in_memory_source_returns_copy() {
        let source = InMemoryRecordSource::new("memoria", Vec::new());
        assert!(source.load().unwrap().is_empty());
    }
}
