// Startup loading of the operational and excluded datasets
use std::sync::Arc;

use shared::models::FinancialRecord;

use super::source::{CsvRecordSource, RecordSource};
use crate::config::settings::DataSettings;
use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub operational: Vec<FinancialRecord>,
    pub excluded: Vec<FinancialRecord>,
}

/// Lifecycle of the one-shot startup load.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Datasets),
    Failed(String),
}

impl LoadState {
    pub fn datasets(&self) -> Option<&Datasets> {
        match self {
            LoadState::Loaded(datasets) => Some(datasets),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

pub struct DatasetLoader {
    operational: Arc<dyn RecordSource>,
    excluded: Arc<dyn RecordSource>,
}

impl DatasetLoader {
    pub fn new(operational: impl RecordSource + 'static, excluded: impl RecordSource + 'static) -> Self {
        Self {
            operational: Arc::new(operational),
            excluded: Arc::new(excluded),
        }
    }

    pub fn from_settings(settings: &DataSettings) -> Result<Self> {
        let delimiter = settings.delimiter_byte()?;
        let operational = CsvRecordSource::new("operacional", &settings.operational_csv, delimiter);
        let excluded = CsvRecordSource::new("excluidos", &settings.excluded_csv, delimiter);
        Ok(Self::new(operational, excluded))
    }

    /// Reads both sources concurrently; fails if either one fails.
    pub async fn load_datasets(&self) -> Result<Datasets> {
        let (operational, excluded) = tokio::try_join!(
            Self::load_blocking(Arc::clone(&self.operational)),
            Self::load_blocking(Arc::clone(&self.excluded)),
        )?;
        tracing::info!(
            operational = operational.len(),
            excluded = excluded.len(),
            "Datasets loaded"
        );
        Ok(Datasets { operational, excluded })
    }

    pub async fn load(&self) -> LoadState {
        match self.load_datasets().await {
            Ok(datasets) => LoadState::Loaded(datasets),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load datasets");
                LoadState::Failed(e.to_string())
            }
        }
    }

    async fn load_blocking(source: Arc<dyn RecordSource>) -> Result<Vec<FinancialRecord>> {
        let name = source.name().to_string();
        tokio::task::spawn_blocking(move || source.load())
            .await
            .map_err(|e| DashboardError::LoadError(format!("Loader task for '{}' failed: {}", name, e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::InMemoryRecordSource;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn record(plan: &str) -> FinancialRecord {
        FinancialRecord {
            cost_center: "1000".to_string(),
            date: "10/01/2024".to_string(),
            financial_plan: plan.to_string(),
            amount: dec!(10),
            creditor: None,
        }
    }

    fn create_dummy_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_in_memory_sources() {
        let loader = DatasetLoader::new(
            InMemoryRecordSource::new("op", vec![record("Aluguel"), record("Energia")]),
            InMemoryRecordSource::new("ex", vec![record("Pró-Labore")]),
        );
        let state = loader.load().await;
        let datasets = state.datasets().unwrap();
        assert_eq!(datasets.operational.len(), 2);
        assert_eq!(datasets.excluded[0].financial_plan, "Pró-Labore");
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_load_from_settings() {
        let operational = create_dummy_csv("Centro de Custo;Data;Plano Financeiro;Valor\n1000;15/01/2024;Aluguel;1.500,00");
        let excluded = create_dummy_csv("Centro de Custo;Data;Plano Financeiro;Valor;Credor\n1000;15/01/2024;Pró-Labore;500,00;Diretor");
        let settings = DataSettings {
            operational_csv: operational.path().to_str().unwrap().to_string(),
            excluded_csv: excluded.path().to_str().unwrap().to_string(),
            csv_delimiter: ';',
        };

        let datasets = DatasetLoader::from_settings(&settings).unwrap().load_datasets().await.unwrap();
        assert_eq!(datasets.operational[0].amount, dec!(1500));
        assert_eq!(datasets.excluded[0].creditor.as_deref(), Some("Diretor"));
    }

    #[tokio::test]
    async fn test_one_failing_source_fails_the_load() {
        let operational = create_dummy_csv("Centro de Custo;Data;Plano Financeiro;Valor");
        let settings = DataSettings {
            operational_csv: operational.path().to_str().unwrap().to_string(),
            excluded_csv: "non_existent_file.csv".to_string(),
            csv_delimiter: ';',
        };

        let state = DatasetLoader::from_settings(&settings).unwrap().load().await;
        match state {
            LoadState::Failed(message) => assert!(message.contains("I/O error")),
            other => panic!("expected failed state, got {:?}", other),
        }
    }

    #[test]
    fn test_from_settings_rejects_non_ascii_delimiter() {
        let settings = DataSettings {
            csv_delimiter: 'é',
            ..DataSettings::default()
        };
        assert!(matches!(
            DatasetLoader::from_settings(&settings),
            Err(DashboardError::ConfigError(_))
        ));
    }

    #[test]
    fn test_default_state_is_loading() {
        let state = LoadState::default();
        assert!(state.is_loading());
        assert!(state.datasets().is_none());
    }
}
