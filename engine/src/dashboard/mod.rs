// Dashboard state and the view models handed to a presentation layer
pub mod state;
pub mod tab;
pub mod text;
pub mod view;

pub use state::{Dashboard, DashboardEvent, FilterState};
pub use tab::Tab;
pub use view::{CellFormat, CellValue, ChartView, Column, CostCenterFilter, SummaryView, TableRow, TableView, ViewModel};
