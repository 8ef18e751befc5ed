//! Per-page overlay state and the frame callback body
//!
//! Owns the drawing surface and the retained elbow readings. The detector
//! callback hands each frame to `on_results`, which runs the frame
//! processor and the renderer back to back.

use crate::pose::{process_frame, AngleReadings, FrameResult, Scene, Side};
use crate::renderer::{render_scene, RenderError, RenderSummary, Surface};

pub struct ElbowOverlay<S: Surface> {
    surface: S,
    readings: AngleReadings,
    last_scene: Scene,
}

impl<S: Surface> ElbowOverlay<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            readings: AngleReadings::new(),
            last_scene: Scene::default(),
        }
    }

    /// Process and draw one detector result
    pub fn on_results(
        &mut self,
        mut frame: FrameResult<S::Image>,
    ) -> Result<RenderSummary, RenderError> {
        let scene = process_frame(&mut frame, &mut self.readings);
        let summary = render_scene(
            &mut self.surface,
            &frame.image,
            frame.width,
            frame.height,
            &scene,
        )?;
        self.last_scene = scene;
        Ok(summary)
    }

    pub fn readings(&self) -> &AngleReadings {
        &self.readings
    }

    pub fn angle(&self, side: Side) -> f32 {
        self.readings.get(side)
    }

    pub fn readout(&self, side: Side) -> String {
        self.readings.readout(side)
    }

    /// Scene drawn by the most recent successful frame
    pub fn last_scene(&self) -> &Scene {
        &self.last_scene
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
