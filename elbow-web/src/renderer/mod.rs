//! Renderer module - mirrored overlay drawing on canvas or raster surfaces
//!
//! Re-exports only. All logic in submodules.

mod canvas;
mod raster;
mod shapes;
mod skeleton;
mod surface;

pub use canvas::{CanvasSurface, FrameImage};
pub use raster::RasterSurface;
pub use skeleton::{
    joint_style, render_scene, JointStyle, RenderSummary, SEGMENT_COLOR, SEGMENT_WIDTH,
};
pub use surface::{Color, RenderError, Surface};
