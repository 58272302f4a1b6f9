// Plain-text rendering of view models for terminal output
use shared::utils::brazilian_format;

use super::view::{ChartView, SummaryView, TableView, ViewModel};

const HIGHLIGHT_MARK: &str = "*";

// Every rendered block ends with a newline
fn join_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn render_summary(view: &SummaryView) -> String {
    let mut lines = vec![
        format!("{} ({})", view.title, view.period),
        format!("  Total: {}", brazilian_format::format_currency(view.summary.total)),
        format!("  Lançamentos: {}", view.summary.record_count),
    ];
    lines.extend(
        view.summary
            .by_cost_center
            .iter()
            .map(|(cost_center, total)| format!("  CC {}: {}", cost_center, brazilian_format::format_currency(*total))),
    );
    join_lines(lines)
}

pub fn render_view(view: &ViewModel) -> String {
    match view {
        ViewModel::Table(table) => render_table(table),
        ViewModel::Chart(chart) => render_chart(chart),
    }
}

pub fn render_table(table: &TableView) -> String {
    let headers: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
    let cells = table.formatted_rows();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut lines = vec![format_line(" ", &headers, &widths), format_line(" ", &separator, &widths)];
    lines.extend(table.rows.iter().zip(&cells).map(|(row, formatted)| {
        let mark = if row.highlight { HIGHLIGHT_MARK } else { " " };
        format_line(mark, formatted, &widths)
    }));
    join_lines(lines)
}

fn format_line<S: AsRef<str>>(mark: &str, cells: &[S], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect();
    format!("{} {}", mark, padded.join(" | ").trim_end())
}

pub fn render_chart(chart: &ChartView) -> String {
    let mut lines = vec![chart.title.clone()];
    lines.extend(
        chart
            .points
            .iter()
            .map(|point| format!("  {}: {}", point.name, brazilian_format::format_currency(point.value))),
    );
    join_lines(lines)
}
