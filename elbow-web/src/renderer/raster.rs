//! In-memory RGBA surface for headless rendering

use image::{imageops, imageops::FilterType, Rgba, RgbaImage};

use super::shapes::{covers_circle, covers_line, pixel_bounds};
use super::surface::{Color, RenderError, Surface};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// CPU raster that mirrors the canvas drawing contract
pub struct RasterSurface {
    image: RgbaImage,
    mirrored: bool,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            mirrored: false,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Map a logical x coordinate to the device, honoring the mirror
    fn device_x(&self, x: f32) -> f32 {
        if self.mirrored {
            self.image.width() as f32 - x
        } else {
            x
        }
    }

    /// Paint every pixel whose center satisfies `covers`
    fn fill_where(
        &mut self,
        min: (f32, f32),
        max: (f32, f32),
        color: Color,
        covers: impl Fn((f32, f32)) -> bool,
    ) {
        let (width, height) = self.image.dimensions();
        let Some((x0, y0, x1, y1)) = pixel_bounds(min, max, width, height) else {
            return;
        };

        let rgba = color.to_rgba();
        for y in y0..y1 {
            for x in x0..x1 {
                if covers((x as f32 + 0.5, y as f32 + 0.5)) {
                    self.image.put_pixel(x, y, rgba);
                }
            }
        }
    }
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Surface for RasterSurface {
    type Image = RgbaImage;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        // Same as assigning canvas.width: fresh buffer, transform reset
        self.image = RgbaImage::new(width, height);
        self.mirrored = false;
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        for pixel in self.image.pixels_mut() {
            *pixel = TRANSPARENT;
        }
        Ok(())
    }

    fn set_mirrored(&mut self, mirrored: bool) -> Result<(), RenderError> {
        self.mirrored = mirrored;
        Ok(())
    }

    fn draw_image(&mut self, image: &RgbaImage) -> Result<(), RenderError> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 || image.width() == 0 || image.height() == 0 {
            return Ok(());
        }

        let mut frame = if image.dimensions() == (width, height) {
            image.clone()
        } else {
            imageops::resize(image, width, height, FilterType::Nearest)
        };
        if self.mirrored {
            imageops::flip_horizontal_in_place(&mut frame);
        }

        // Camera frames are opaque and drawn first, so copying equals source-over
        imageops::replace(&mut self.image, &frame, 0, 0);
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        let a = (self.device_x(from.0), from.1);
        let b = (self.device_x(to.0), to.1);
        let half = width / 2.0;

        self.fill_where(
            (a.0.min(b.0) - half, a.1.min(b.1) - half),
            (a.0.max(b.0) + half, a.1.max(b.1) + half),
            color,
            |p| covers_line(p, a, b, width),
        );
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: (f32, f32),
        radius: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        let c = (self.device_x(center.0), center.1);

        self.fill_where(
            (c.0 - radius, c.1 - radius),
            (c.0 + radius, c.1 + radius),
            color,
            |p| covers_circle(p, c, radius),
        );
        Ok(())
    }
}
