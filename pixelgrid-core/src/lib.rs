pub mod config;
pub mod error;
pub mod grid_lines;
pub mod image_fit;
pub mod interaction;
pub mod points;
pub mod rect;
pub mod render;
pub mod selection;
pub mod sold_region;
pub mod stats;
pub mod view_transform;

pub use config::GridConfig;
pub use error::RegionError;
pub use grid_lines::{grid_line_positions, grid_line_spacing};
pub use image_fit::{fit_image, FitMode, ImageFit};
pub use interaction::{CanvasView, InteractionMode, PointerDown};
pub use points::{FloatRect, Point};
pub use rect::GridRect;
pub use render::{render_frame, Frame, NoImages, Palette, RegionImages, Surface};
pub use selection::snap_selection;
pub use sold_region::{parse_regions, region_at, retain_valid_regions, SoldRegion};
pub use stats::{format_count, GridStats};
pub use view_transform::ViewTransform;
