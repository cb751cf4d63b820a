pub mod grid_stats;
pub mod pixel_canvas;
pub mod selection_summary;
pub mod toolbar;

pub use grid_stats::GridStatsPanel;
pub use pixel_canvas::PixelCanvas;
pub use selection_summary::SelectionSummary;
pub use toolbar::Toolbar;
