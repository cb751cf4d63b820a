mod canvas_view;
mod redraw;
mod sold_regions;

pub use canvas_view::{use_canvas_view, CanvasViewHandle};
pub use redraw::{use_debounced_redraw, RedrawHandle};
pub use sold_regions::{use_sold_regions, RegionSource};
