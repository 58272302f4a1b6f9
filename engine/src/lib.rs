// Aggregation core of the financial dashboard: loads the operational and
// excluded datasets, filters them by period and derives table/chart views.
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod processing;

pub use error::{DashboardError, Result};
