use pixelgrid_core::{FloatRect, ImageFit, Point, Surface};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

/// [`Surface`] backed by a browser canvas 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: (u32, u32),
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, size: (u32, u32)) -> Self {
        Self { ctx, size }
    }

    fn report(op: &str, result: Result<(), JsValue>) {
        if let Err(e) = result {
            log::warn!("Canvas {} failed: {:?}", op, e);
        }
    }
}

#[allow(deprecated)]
impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        Self::report("translate", self.ctx.translate(x, y));
    }

    fn scale(&mut self, factor: f64) {
        Self::report("scale", self.ctx.scale(factor, factor));
    }

    fn fill_rect(&mut self, rect: FloatRect, color: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_rect(&mut self, rect: FloatRect, color: &str, line_width: f64) {
        self.ctx.set_stroke_style(&JsValue::from_str(color));
        self.ctx.set_line_width(line_width);
        self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn line(&mut self, from: Point, to: Point, color: &str, line_width: f64) {
        self.ctx.set_stroke_style(&JsValue::from_str(color));
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn draw_image(&mut self, image: &HtmlImageElement, fit: &ImageFit) {
        let ImageFit { source, dest } = *fit;
        Self::report(
            "drawImage",
            self.ctx
                .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    image,
                    source.x,
                    source.y,
                    source.width,
                    source.height,
                    dest.x,
                    dest.y,
                    dest.width,
                    dest.height,
                ),
        );
    }
}
