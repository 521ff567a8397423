mod dashboard;
mod detail_card;
mod legend;
mod zone_panel;

pub use dashboard::YardHeatmapDashboard;
