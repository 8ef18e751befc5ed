//! Skeleton rendering - draws the camera frame, arm segments, and joints

use super::surface::{Color, RenderError, Surface};
use crate::pose::{JointRole, Scene};

/// Colors for different visualization elements
mod colors {
    use super::Color;

    /// Arm segments
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Elbow joints
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Shoulders and wrists
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
}

pub const SEGMENT_COLOR: Color = colors::RED;
pub const SEGMENT_WIDTH: f32 = 3.0;

/// Fill color and radius (pixels) of a highlight circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointStyle {
    pub color: Color,
    pub radius: f32,
}

pub fn joint_style(role: JointRole) -> JointStyle {
    match role {
        JointRole::Elbow => JointStyle { color: colors::BLUE, radius: 5.0 },
        JointRole::Shoulder => JointStyle { color: colors::YELLOW, radius: 4.0 },
        JointRole::Wrist => JointStyle { color: colors::YELLOW, radius: 3.0 },
    }
}

/// What actually reached the surface this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub segments_drawn: usize,
    /// Segments dropped by the visibility gate
    pub segments_skipped: usize,
    pub points_drawn: usize,
}

/// Render one frame: camera image, then segments, then joints on top
pub fn render_scene<S: Surface>(
    surface: &mut S,
    image: &S::Image,
    width: u32,
    height: u32,
    scene: &Scene,
) -> Result<RenderSummary, RenderError> {
    surface.resize(width, height)?;
    surface.clear()?;
    surface.set_mirrored(true)?;
    surface.draw_image(image)?;

    let (w, h) = (width as f32, height as f32);
    let mut summary = RenderSummary::default();

    for connection in &scene.connections {
        if !connection.is_drawable() {
            summary.segments_skipped += 1;
            continue;
        }
        surface.stroke_line(
            connection.from.to_pixels(w, h),
            connection.to.to_pixels(w, h),
            SEGMENT_WIDTH,
            SEGMENT_COLOR,
        )?;
        summary.segments_drawn += 1;
    }

    for highlight in &scene.highlights {
        let style = joint_style(highlight.role);
        surface.fill_circle(highlight.point.to_pixels(w, h), style.radius, style.color)?;
        summary.points_drawn += 1;
    }

    surface.set_mirrored(false)?;
    Ok(summary)
}
