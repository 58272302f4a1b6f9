use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

const COST_CENTER_PREFIX: &str = "cc";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    PerCostCenter(String),
    Total,
    Chart,
    Excluded,
    ExcludedChart,
}

impl Tab {
    /// Identifier used by tab widgets, e.g. "cc1000" or "excluded-chart".
    pub fn id(&self) -> String {
        match self {
            Tab::PerCostCenter(code) => format!("{}{}", COST_CENTER_PREFIX, code),
            Tab::Total => "total".to_string(),
            Tab::Chart => "chart".to_string(),
            Tab::Excluded => "excluded".to_string(),
            Tab::ExcludedChart => "excluded-chart".to_string(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Tab::PerCostCenter(code) => format!("CC {}", code),
            Tab::Total => "Total".to_string(),
            Tab::Chart => "Gráfico".to_string(),
            Tab::Excluded => "Excluídos".to_string(),
            Tab::ExcludedChart => "Gráfico Excluídos".to_string(),
        }
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, Tab::Excluded | Tab::ExcludedChart)
    }

    /// Tabs in display order for the given cost centers.
    pub fn all(cost_centers: &[String]) -> Vec<Tab> {
        cost_centers
            .iter()
            .cloned()
            .map(Tab::PerCostCenter)
            .chain([Tab::Total, Tab::Chart, Tab::Excluded, Tab::ExcludedChart])
            .collect()
    }
}

impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total" => Ok(Tab::Total),
            "chart" => Ok(Tab::Chart),
            "excluded" => Ok(Tab::Excluded),
            "excluded-chart" => Ok(Tab::ExcludedChart),
            other => match other.strip_prefix(COST_CENTER_PREFIX) {
                Some(code) if !code.is_empty() => Ok(Tab::PerCostCenter(code.to_string())),
                _ => Err(DashboardError::ProcessingError(format!("Unknown tab '{}'", s))),
            },
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
