//! Elbow Web - live elbow angle overlay for MediaPipe Holistic
//!
//! Entry point for WASM module. Only contains:
//! - Console logging macros
//! - Module declarations and re-exports
//! - The wasm_bindgen start hook

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
fn log(s: &str) {
    web_sys::console::log_1(&s.into());
}

#[cfg(target_arch = "wasm32")]
fn warn(s: &str) {
    web_sys::console::warn_1(&s.into());
}

// Native builds (tests, headless rendering) have no console
#[cfg(not(target_arch = "wasm32"))]
fn log(s: &str) {
    eprintln!("{}", s);
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(s: &str) {
    eprintln!("warning: {}", s);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

macro_rules! console_warn {
    ($($t:tt)*) => ($crate::warn(&format_args!($($t)*).to_string()))
}

mod bridge;
mod overlay;
mod pose;
mod renderer;

pub use bridge::{
    landmark_set_from_entries, locate_holistic_file, overlay_options, overlay_options_from_json,
    BridgeError, Camera, CameraOptions, ElbowSession, Holistic, HolisticOptions, LandmarkFields,
    OverlayOptions, HOLISTIC_CDN,
};
pub use overlay::ElbowOverlay;
pub use pose::{
    interior_angle, process_frame, redact_for_display, AngleReadings, Connection, FrameResult,
    Highlight, JointRole, Landmark, LandmarkSet, Scene, Side, HAND_LANDMARK_COUNT, HAND_WRIST,
    LEFT_ELBOW, LEFT_SHOULDER, POSE_LANDMARK_COUNT, REDACTED_POSE_LANDMARKS, RIGHT_ELBOW,
    RIGHT_SHOULDER, VISIBILITY_THRESHOLD,
};
pub use renderer::{
    joint_style, render_scene, CanvasSurface, Color, FrameImage, JointStyle, RasterSurface,
    RenderError, RenderSummary, Surface, SEGMENT_COLOR, SEGMENT_WIDTH,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
