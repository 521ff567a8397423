pub mod d410_yard_heatmap;

pub use d410_yard_heatmap::ui::YardHeatmapDashboard;
