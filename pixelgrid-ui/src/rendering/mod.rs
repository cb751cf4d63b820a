pub mod canvas_surface;
pub mod canvas_utils;
pub mod image_cache;

pub use canvas_surface::CanvasSurface;
pub use canvas_utils::{
    canvas_local_point, detach_listener, get_2d_context, open_in_new_tab, sync_canvas_buffer,
};
pub use image_cache::{load_region_image, ImageCache, ImageRequest, ImageState};
