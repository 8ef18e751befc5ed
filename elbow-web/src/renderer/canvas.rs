//! Browser canvas surface - CanvasRenderingContext2d backend

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, ImageBitmap};

use super::surface::{Color, RenderError, Surface};

/// Camera frame sources the detector may hand back
pub enum FrameImage {
    Video(HtmlVideoElement),
    Canvas(HtmlCanvasElement),
    Bitmap(ImageBitmap),
}

/// Overlay `<canvas>` and its 2d context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, RenderError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(RenderError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::NoContext)?;

        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    type Image = FrameImage;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        // Assigning the size also resets the bitmap and transform
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        let (width, height) = self.size();
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        Ok(())
    }

    fn set_mirrored(&mut self, mirrored: bool) -> Result<(), RenderError> {
        if mirrored {
            let width = self.canvas.width() as f64;
            self.ctx.set_transform(-1.0, 0.0, 0.0, 1.0, width, 0.0)?;
        } else {
            self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        }
        Ok(())
    }

    fn draw_image(&mut self, image: &FrameImage) -> Result<(), RenderError> {
        let (width, height) = self.size();
        let (w, h) = (width as f64, height as f64);

        match image {
            FrameImage::Video(video) => self
                .ctx
                .draw_image_with_html_video_element_and_dw_and_dh(video, 0.0, 0.0, w, h)?,
            FrameImage::Canvas(canvas) => self
                .ctx
                .draw_image_with_html_canvas_element_and_dw_and_dh(canvas, 0.0, 0.0, w, h)?,
            FrameImage::Bitmap(bitmap) => self
                .ctx
                .draw_image_with_image_bitmap_and_dw_and_dh(bitmap, 0.0, 0.0, w, h)?,
        }
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.ctx.begin_path();
        self.ctx.move_to(from.0 as f64, from.1 as f64);
        self.ctx.line_to(to.0 as f64, to.1 as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: (f32, f32),
        radius: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.0 as f64, center.1 as f64, radius as f64, 0.0, TAU)?;
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
        Ok(())
    }
}
