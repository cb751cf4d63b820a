//! Frame rendering through an abstract 2D drawing surface.
//!
//! The browser implements [`Surface`] on top of `CanvasRenderingContext2d`;
//! tests implement it with a recorder. Everything drawn here is in logical
//! units once the view transform has been applied, except the background.

use crate::{
    fit_image, grid_line_positions, grid_line_spacing, FloatRect, GridConfig, GridRect, ImageFit,
    Point, SoldRegion, ViewTransform,
};

/// Minimal 2D drawing API the frame renderer needs.
pub trait Surface {
    type Image;

    /// Size of the drawing buffer in screen pixels
    fn size(&self) -> (u32, u32);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn scale(&mut self, factor: f64);
    fn fill_rect(&mut self, rect: FloatRect, color: &str);
    fn stroke_rect(&mut self, rect: FloatRect, color: &str, line_width: f64);
    fn line(&mut self, from: Point, to: Point, color: &str, line_width: f64);
    fn draw_image(&mut self, image: &Self::Image, fit: &ImageFit);
}

/// Lookup of decoded images for sold regions.
pub trait RegionImages {
    type Image;

    /// The decoded image for `region` and its natural size, if loaded.
    fn loaded(&self, region: &SoldRegion) -> Option<(&Self::Image, (u32, u32))>;
}

/// Image lookup for surfaces that never have images ready.
pub struct NoImages<I>(std::marker::PhantomData<I>);

impl<I> NoImages<I> {
    pub fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<I> Default for NoImages<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> RegionImages for NoImages<I> {
    type Image = I;

    fn loaded(&self, _region: &SoldRegion) -> Option<(&I, (u32, u32))> {
        None
    }
}

/// Colors used by the frame renderer (CSS color strings).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub grid_background: &'static str,
    pub grid_line: &'static str,
    pub sold_fill: &'static str,
    pub sold_border: &'static str,
    pub selection_fill: &'static str,
    pub selection_border: &'static str,
}

impl Palette {
    pub const DEFAULT: Palette = Palette {
        background: "#1e293b",
        grid_background: "#0f172a",
        grid_line: "#374151",
        sold_fill: "#6b7280",
        sold_border: "#9ca3af",
        selection_fill: "#10b981",
        selection_border: "#34d399",
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Grid lines are one screen pixel wide regardless of zoom
const GRID_LINE_SCREEN_WIDTH: f64 = 1.0;
/// Region and selection borders, in screen pixels
const BORDER_SCREEN_WIDTH: f64 = 3.0;

/// Everything that determines one frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub transform: ViewTransform,
    pub regions: &'a [SoldRegion],
    pub selection: Option<GridRect>,
    pub config: &'a GridConfig,
    pub palette: &'a Palette,
}

/// Draw one complete frame.
pub fn render_frame<S, M>(surface: &mut S, frame: &Frame<'_>, images: &M)
where
    S: Surface,
    M: RegionImages<Image = S::Image>,
{
    let Frame {
        transform,
        regions,
        selection,
        config,
        palette,
    } = *frame;
    let (width, height) = surface.size();
    let grid = config.grid_size_f64();
    let grid_rect = FloatRect::new(0.0, 0.0, grid, grid);
    let zoom = transform.zoom;

    surface.fill_rect(
        FloatRect::new(0.0, 0.0, width as f64, height as f64),
        palette.background,
    );

    surface.save();
    surface.translate(transform.pan.x, transform.pan.y);
    surface.scale(zoom);

    surface.fill_rect(grid_rect, palette.grid_background);

    if let Some(spacing) = grid_line_spacing(zoom, config) {
        let line_width = GRID_LINE_SCREEN_WIDTH / zoom;
        for pos in grid_line_positions(spacing, config.grid_size) {
            let pos = pos as f64;
            surface.line(
                Point::new(pos, 0.0),
                Point::new(pos, grid),
                palette.grid_line,
                line_width,
            );
        }
        for pos in grid_line_positions(spacing, config.grid_size) {
            let pos = pos as f64;
            surface.line(
                Point::new(0.0, pos),
                Point::new(grid, pos),
                palette.grid_line,
                line_width,
            );
        }
    }

    let border_width = BORDER_SCREEN_WIDTH / zoom;
    for region in regions {
        let rect = FloatRect::from(region.rect);
        let fitted = images.loaded(region).and_then(|(image, dims)| {
            fit_image(dims, region.rect, config.image_fit).map(|fit| (image, fit))
        });
        match fitted {
            Some((image, fit)) => surface.draw_image(image, &fit),
            None => surface.fill_rect(rect, palette.sold_fill),
        }
        surface.stroke_rect(rect, palette.sold_border, border_width);
    }

    if let Some(selection) = selection.filter(|s| !s.is_empty()) {
        let rect = FloatRect::from(selection);
        surface.fill_rect(rect, palette.selection_fill);
        surface.stroke_rect(rect, palette.selection_border, border_width);
    }

    surface.restore();
}
