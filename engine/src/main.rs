// Loads both datasets and prints every dashboard tab as text
use dashboard_engine::config::settings::DashboardSettings;
use dashboard_engine::dashboard::{text, Dashboard, DashboardEvent};
use dashboard_engine::data::{DatasetLoader, LoadState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting financial dashboard...");

    let settings = match std::env::args().nth(1) {
        Some(path) => DashboardSettings::load_from_file(&path)?,
        None => DashboardSettings::load_default()?,
    };
    info!(
        operational = %settings.data.operational_csv,
        excluded = %settings.data.excluded_csv,
        "Dataset paths configured"
    );

    let loader = DatasetLoader::from_settings(&settings.data)?;
    let mut dashboard = Dashboard::new(settings);
    dashboard.apply(DashboardEvent::DatasetsLoaded(loader.load().await));

    if let LoadState::Failed(message) = dashboard.load_state() {
        anyhow::bail!("Could not load datasets: {}", message);
    }

    print!("{}", text::render_summary(&dashboard.summary_view()));
    for tab in dashboard.tabs() {
        dashboard.apply(DashboardEvent::SelectTab(tab.id()));
        if let Some(view) = dashboard.render_active_view() {
            println!("\n== {} ==", tab.title());
            print!("{}", text::render_view(&view));
        }
    }

    Ok(())
}
