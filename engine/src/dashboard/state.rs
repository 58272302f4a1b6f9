// Dashboard state: filter inputs, the active tab, and the loaded datasets.
// Every derived collection is recomputed from these on demand.
use chrono::{Local, NaiveDate};
use shared::models::{ChartPoint, FinancialRecord};
use shared::utils::brazilian_format;

use super::tab::Tab;
use super::view::{CellValue, ChartView, Column, CostCenterFilter, SummaryView, TableRow, TableView, ViewModel};
use crate::config::settings::DashboardSettings;
use crate::data::loader::LoadState;
use crate::processing::{self, DateRange};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// ISO "yyyy-mm-dd" or empty.
    pub start_date: String,
    /// ISO "yyyy-mm-dd" or empty.
    pub end_date: String,
    pub include_prolabore: bool,
}

/// User-driven (and loader-driven) state transitions, applied one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    DatasetsLoaded(LoadState),
    SetStartDate(String),
    SetEndDate(String),
    SetIncludeProlabore(bool),
    /// Tab identifier as emitted by the tab widget; unknown ids select nothing.
    SelectTab(String),
    SetChartFilter(CostCenterFilter),
}

pub struct Dashboard {
    settings: DashboardSettings,
    load_state: LoadState,
    filters: FilterState,
    active_tab: Option<Tab>,
    chart_filter: CostCenterFilter,
    today: NaiveDate,
}

impl Dashboard {
    pub fn new(settings: DashboardSettings) -> Self {
        let active_tab = Self::resolve_tab(&settings.cost_centers, &settings.initial_tab);
        let filters = FilterState {
            include_prolabore: settings.prolabore.include_by_default,
            ..FilterState::default()
        };
        Self {
            settings,
            load_state: LoadState::Loading,
            filters,
            active_tab,
            chart_filter: CostCenterFilter::All,
            today: Local::now().date_naive(),
        }
    }

    /// Pins the date used for the pró-labore record when the range has no end.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn apply(&mut self, event: DashboardEvent) {
        tracing::debug!(?event, "Applying dashboard event");
        match event {
            DashboardEvent::DatasetsLoaded(state) => self.set_load_state(state),
            DashboardEvent::SetStartDate(date) => {
                self.filters.start_date = date;
                self.seed_range_from_data();
            }
            DashboardEvent::SetEndDate(date) => {
                self.filters.end_date = date;
                self.seed_range_from_data();
            }
            DashboardEvent::SetIncludeProlabore(include) => self.filters.include_prolabore = include,
            DashboardEvent::SelectTab(id) => {
                self.active_tab = Self::resolve_tab(&self.settings.cost_centers, &id);
            }
            DashboardEvent::SetChartFilter(filter) => self.chart_filter = filter,
        }
    }

    // Only the tabs offered for the configured cost centers are selectable
    fn resolve_tab(cost_centers: &[String], id: &str) -> Option<Tab> {
        match id.parse::<Tab>() {
            Ok(tab) if Tab::all(cost_centers).contains(&tab) => Some(tab),
            Ok(tab) => {
                tracing::warn!(tab = %tab, "Tab is not offered for the configured cost centers; rendering nothing");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Tab selection renders nothing");
                None
            }
        }
    }

    fn set_load_state(&mut self, state: LoadState) {
        self.load_state = state;
        self.seed_range_from_data();
    }

    // Whenever both dates are empty and data is loaded, the filter falls back
    // to the span of both datasets.
    fn seed_range_from_data(&mut self) {
        if !(self.filters.start_date.is_empty() && self.filters.end_date.is_empty()) {
            return;
        }
        let Some(datasets) = self.load_state.datasets() else {
            return;
        };
        let span = DateRange::spanning(datasets.operational.iter().chain(datasets.excluded.iter()));
        if let Some(DateRange { start: Some(start), end: Some(end) }) = span {
            self.filters.start_date = brazilian_format::format_iso_date(start);
            self.filters.end_date = brazilian_format::format_iso_date(end);
            tracing::info!(start = %self.filters.start_date, end = %self.filters.end_date, "Date range set from data");
        }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab.as_ref()
    }

    pub fn chart_filter(&self) -> &CostCenterFilter {
        &self.chart_filter
    }

    pub fn tabs(&self) -> Vec<Tab> {
        Tab::all(&self.settings.cost_centers)
    }

    pub fn date_range(&self) -> DateRange {
        DateRange::from_iso(&self.filters.start_date, &self.filters.end_date)
    }

    pub fn period_label(&self) -> String {
        processing::format_period_label(
            &self.filters.start_date,
            &self.filters.end_date,
            &self.settings.whole_period_label,
        )
    }

    /// Date-filtered operational records, plus the pró-labore aggregate when
    /// the toggle is on. Empty until both datasets are loaded.
    pub fn filtered_operational(&self) -> Vec<FinancialRecord> {
        let Some(datasets) = self.load_state.datasets() else {
            return Vec::new();
        };
        let range = self.date_range();
        let filtered = processing::filter_records(&datasets.operational, &range);
        if !self.filters.include_prolabore {
            return filtered;
        }
        let excluded = processing::filter_records(&datasets.excluded, &range);
        processing::augment_operational(filtered, &excluded, &self.settings.prolabore, &range, self.today)
    }

    pub fn filtered_excluded(&self) -> Vec<FinancialRecord> {
        self.load_state
            .datasets()
            .map(|datasets| processing::filter_records(&datasets.excluded, &self.date_range()))
            .unwrap_or_default()
    }

    /// Summary panel for the active tab: excluded tabs summarise the excluded dataset.
    pub fn summary_view(&self) -> SummaryView {
        let excluded_tab = self.active_tab.as_ref().is_some_and(Tab::is_excluded);
        let (title, records) = if excluded_tab {
            ("Resumo Excluídos", self.filtered_excluded())
        } else {
            ("Resumo Operacional", self.filtered_operational())
        };
        SummaryView {
            title: title.to_string(),
            period: self.period_label(),
            summary: processing::calculate_summary(&records),
        }
    }

    /// View model for the active tab; `None` while loading or when no tab is selected.
    pub fn render_active_view(&self) -> Option<ViewModel> {
        let tab = self.active_tab.as_ref()?;
        self.render_tab(tab)
    }

    pub fn render_tab(&self, tab: &Tab) -> Option<ViewModel> {
        if self.load_state.datasets().is_none() {
            return None;
        }
        let period = self.period_label();
        let view = match tab {
            Tab::PerCostCenter(code) => ViewModel::Table(self.plan_table(&self.filtered_operational(), Some(code.as_str()), &period)),
            Tab::Total => ViewModel::Table(self.plan_table(&self.filtered_operational(), None, &period)),
            Tab::Chart => {
                let points = self.chart_points(&self.filtered_operational(), self.chart_filter.as_code());
                ViewModel::Chart(ChartView {
                    title: format!("Despesas por Plano Financeiro ({}) - {}", self.chart_filter.label(), period),
                    points,
                    cost_center_filter: Some(self.chart_filter.clone()),
                    cost_center_options: self.settings.cost_centers.clone(),
                })
            }
            Tab::Excluded => ViewModel::Table(self.excluded_table()),
            Tab::ExcludedChart => ViewModel::Chart(ChartView {
                title: format!("Despesas por Plano Financeiro Excluído - {}", period),
                points: self.chart_points(&self.filtered_excluded(), None),
                cost_center_filter: None,
                cost_center_options: Vec::new(),
            }),
        };
        Some(view)
    }

    fn plan_table(&self, records: &[FinancialRecord], cost_center: Option<&str>, period: &str) -> TableView {
        let rows = processing::group_by_plan(records, cost_center, &self.settings.prolabore.highlight_marker)
            .into_iter()
            .map(|row| {
                let highlight = row.highlight;
                TableRow { highlight, ..TableRow::default() }
                    .with("plano", CellValue::Text(row.label))
                    .with("valor", CellValue::Amount(row.total))
            })
            .collect();
        TableView {
            columns: vec![
                Column::text("Plano Financeiro", "plano"),
                Column::currency(format!("Valor ({})", period), "valor"),
            ],
            rows,
        }
    }

    fn chart_points(&self, records: &[FinancialRecord], cost_center: Option<&str>) -> Vec<ChartPoint> {
        processing::group_by_plan(records, cost_center, &self.settings.prolabore.highlight_marker)
            .into_iter()
            .map(ChartPoint::from)
            .collect()
    }

    // Raw excluded records, newest first; records with unparseable dates go last
    fn excluded_table(&self) -> TableView {
        let mut records = self.filtered_excluded();
        records.sort_by_key(|record| std::cmp::Reverse(record.parsed_date()));
        let rows = records
            .into_iter()
            .map(|record| {
                TableRow::default()
                    .with("data", CellValue::Text(record.date))
                    .with("plano", CellValue::Text(record.financial_plan))
                    .with("credor", CellValue::Text(record.creditor.unwrap_or_default()))
                    .with("centroCusto", CellValue::Text(record.cost_center))
                    .with("valor", CellValue::Amount(record.amount))
            })
            .collect();
        TableView {
            columns: vec![
                Column::text("Data", "data"),
                Column::text("Plano Financeiro", "plano"),
                Column::text("Credor", "credor"),
                Column::text("Centro de Custo", "centroCusto"),
                Column::currency("Valor", "valor"),
            ],
            rows,
        }
    }
}
