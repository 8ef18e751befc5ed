//! Drawing surface abstraction shared by the canvas and raster backends

use wasm_bindgen::JsValue;

/// Errors raised while drawing a frame
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("canvas has no 2d rendering context")]
    NoContext,

    #[error("canvas call failed: {0}")]
    Canvas(String),
}

impl From<JsValue> for RenderError {
    fn from(value: JsValue) -> Self {
        RenderError::Canvas(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string for the 2d context
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

/// A 2D raster target the skeleton renderer can draw onto.
///
/// Coordinates passed to the drawing calls are pixels in the logical
/// (unmirrored) frame; the surface applies the mirror transform itself.
pub trait Surface {
    /// Camera frame type this surface can composite
    type Image;

    /// Match the native frame size. Resizing discards previous content.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError>;

    fn size(&self) -> (u32, u32);

    /// Erase everything drawn so far
    fn clear(&mut self) -> Result<(), RenderError>;

    /// Flip subsequent drawing along the vertical axis
    fn set_mirrored(&mut self, mirrored: bool) -> Result<(), RenderError>;

    /// Draw the camera frame stretched over the whole surface
    fn draw_image(&mut self, image: &Self::Image) -> Result<(), RenderError>;

    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
    ) -> Result<(), RenderError>;

    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Color)
        -> Result<(), RenderError>;
}
