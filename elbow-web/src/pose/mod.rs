//! Pose module - landmark geometry for the elbow overlay
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod frame;
mod landmarks;

pub use angles::interior_angle;
pub use frame::{
    process_frame, AngleReadings, Connection, FrameResult, Highlight, JointRole, Scene, Side,
    VISIBILITY_THRESHOLD,
};
pub use landmarks::{
    redact_for_display, Landmark, LandmarkSet,
    // Constants
    HAND_LANDMARK_COUNT, HAND_WRIST, LEFT_ELBOW, LEFT_SHOULDER, POSE_LANDMARK_COUNT,
    REDACTED_POSE_LANDMARKS, RIGHT_ELBOW, RIGHT_SHOULDER,
};
