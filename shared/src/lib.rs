pub mod models;
pub mod utils;

pub use models::{AggregatedRow, ChartPoint, FinancialRecord, Summary};
