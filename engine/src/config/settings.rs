// Dashboard settings, embedded defaults or a user-supplied JSON file
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DashboardError, Result};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardSettings {
    pub data: DataSettings,
    pub prolabore: ProlaboreSettings,
    /// Cost centers that get their own table tab, in tab order.
    pub cost_centers: Vec<String>,
    pub whole_period_label: String,
    /// Tab identifier selected at startup, e.g. "cc1000".
    pub initial_tab: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DataSettings {
    pub operational_csv: String,
    pub excluded_csv: String,
    pub csv_delimiter: char,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProlaboreSettings {
    pub cost_center: String,
    /// Lowercase substrings identifying a pró-labore line in the excluded dataset.
    pub markers: Vec<String>,
    pub aggregate_label: String,
    /// Lowercase substring that marks a row for display emphasis.
    pub highlight_marker: String,
    pub include_by_default: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        DashboardSettings {
            data: DataSettings::default(),
            prolabore: ProlaboreSettings::default(),
            cost_centers: vec!["1000".to_string(), "2000".to_string(), "2002".to_string()],
            whole_period_label: "Todo o Período".to_string(),
            initial_tab: "cc1000".to_string(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        DataSettings {
            operational_csv: "data/operacional.csv".to_string(),
            excluded_csv: "data/excluidos.csv".to_string(),
            csv_delimiter: ';',
        }
    }
}

impl Default for ProlaboreSettings {
    fn default() -> Self {
        ProlaboreSettings {
            cost_center: "1000".to_string(),
            markers: vec![
                "pró-labore".to_string(),
                "pro-labore".to_string(),
                "prolabore".to_string(),
            ],
            aggregate_label: "Soma Pró-Labore (Diretoria)".to_string(),
            highlight_marker: "soma pró-labore".to_string(),
            include_by_default: true,
        }
    }
}

impl DashboardSettings {
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)?;
        let settings = Self::from_json(&config_str)?;
        tracing::info!(path = %path.display(), "Loaded dashboard settings");
        Ok(settings)
    }

    pub fn from_json(config_str: &str) -> Result<Self> {
        let settings: DashboardSettings = serde_json::from_str(config_str)
            .map_err(|e| DashboardError::ConfigError(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.prolabore.cost_center.trim().is_empty() {
            return Err(DashboardError::ConfigError(
                "prolabore.cost_center must not be empty".to_string(),
            ));
        }
        if self.prolabore.markers.iter().any(|m| m.trim().is_empty()) {
            return Err(DashboardError::ConfigError(
                "prolabore.markers must not contain empty entries".to_string(),
            ));
        }
        let label = self.prolabore.aggregate_label.to_lowercase();
        if !label.contains(&self.prolabore.highlight_marker.to_lowercase()) {
            return Err(DashboardError::ConfigError(format!(
                "prolabore.aggregate_label '{}' must contain highlight_marker '{}'",
                self.prolabore.aggregate_label, self.prolabore.highlight_marker
            )));
        }
        self.data.delimiter_byte()?;
        Ok(())
    }
}

impl DataSettings {
    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.csv_delimiter.is_ascii() {
            Ok(self.csv_delimiter as u8)
        } else {
            Err(DashboardError::ConfigError(format!(
                "csv_delimiter '{}' must be a single ASCII character",
                self.csv_delimiter
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_default_matches_code_default() {
        let settings = DashboardSettings::load_default().unwrap();
        assert_eq!(settings, DashboardSettings::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        let mut json: serde_json::Value =
            serde_json::from_str(include_str!("../../assets/config/default.json")).unwrap();
        json["prolabore"]["cost_center"] = serde_json::json!("2000");
        write!(file, "{}", json).unwrap();

        let settings = DashboardSettings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.prolabore.cost_center, "2000");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = DashboardSettings::load_from_file("does/not/exist.json");
        assert!(matches!(result, Err(DashboardError::IoError { .. })));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let result = DashboardSettings::from_json("{ \"data\": 1 }");
        assert!(matches!(result, Err(DashboardError::ConfigError(_))));
    }

    #[test]
    fn test_aggregate_label_must_carry_highlight_marker() {
        let mut json: serde_json::Value =
            serde_json::from_str(include_str!("../../assets/config/default.json")).unwrap();
        json["prolabore"]["aggregate_label"] = serde_json::json!("Retiradas da Diretoria");
        let err = DashboardSettings::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigError(_)));
        assert!(err.to_string().contains("highlight_marker"));

        json["prolabore"]["aggregate_label"] = serde_json::json!("SOMA PRÓ-LABORE dos sócios");
        assert!(DashboardSettings::from_json(&json.to_string()).is_ok());
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let mut json: serde_json::Value =
            serde_json::from_str(include_str!("../../assets/config/default.json")).unwrap();
        json["data"]["csv_delimiter"] = serde_json::json!("é");
        let err = DashboardSettings::from_json(&json.to_string()).unwrap_err();
        assert!(err.to_string().contains("csv_delimiter"));
    }

    #[test]
    fn test_delimiter_byte() {
        assert_eq!(DataSettings::default().delimiter_byte().unwrap(), b';');
        let settings = DataSettings {
            csv_delimiter: '§',
            ..DataSettings::default()
        };
        assert!(matches!(settings.delimiter_byte(), Err(DashboardError::ConfigError(_))));
    }

    #[test]
    fn test_empty_marker_rejected() {
        let mut json: serde_json::Value =
            serde_json::from_str(include_str!("../../assets/config/default.json")).unwrap();
        json["prolabore"]["markers"] = serde_json::json!(["pró-labore", " "]);
        let result = DashboardSettings::from_json(&json.to_string());
        assert!(result.unwrap_err().to_string().contains("markers"));
    }
}
