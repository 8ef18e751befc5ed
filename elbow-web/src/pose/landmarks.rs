//! Landmark types and anatomical indices
//!
//! MediaPipe Holistic reports three independent landmark sets per frame:
//! pose (33 points) and one hand set per side (21 points). Every set is
//! indexed positionally by a fixed anatomical schema.

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total, Hand - 21 total)
// ============================================================================

pub const POSE_LANDMARK_COUNT: usize = 33;
pub const HAND_LANDMARK_COUNT: usize = 21;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;

/// Wrist is always the first entry of a hand set
pub const HAND_WRIST: usize = 0;

/// Pose points hidden from the upper-body elbow view (index, anatomical name).
///
/// Head points are irrelevant to the elbow readout, and the pose model's
/// own wrist/finger points are replaced by the hand model's wrist.
pub const REDACTED_POSE_LANDMARKS: [(usize, &str); 19] = [
    (0, "nose"),
    (1, "left_eye_inner"),
    (2, "left_eye"),
    (3, "left_eye_outer"),
    (4, "right_eye_inner"),
    (5, "right_eye"),
    (6, "right_eye_outer"),
    (7, "left_ear"),
    (8, "right_ear"),
    (9, "mouth_left"),
    (10, "mouth_right"),
    (15, "left_wrist"),
    (16, "right_wrist"),
    (17, "left_pinky"),
    (18, "right_pinky"),
    (19, "left_index"),
    (20, "right_index"),
    (21, "left_thumb"),
    (22, "right_thumb"),
];

// ============================================================================
// LANDMARK DATA STRUCTURES
// ============================================================================

/// A single landmark point (normalized coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth
    /// Detector confidence in [0,1]; hand landmarks carry none
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0, visibility: None }
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Scale normalized coordinates to pixel coordinates
    pub fn to_pixels(&self, width: f32, height: f32) -> (f32, f32) {
        (self.x * width, self.y * height)
    }

    /// Pixel coordinates on a `width`×`height` frame, widened for angle maths
    pub fn pixel_point(&self, width: u32, height: u32) -> (f64, f64) {
        (self.x as f64 * width as f64, self.y as f64 * height as f64)
    }

    /// False only when the detector reported a visibility below `threshold`
    pub fn passes_visibility(&self, threshold: f32) -> bool {
        match self.visibility {
            Some(v) => v >= threshold,
            None => true,
        }
    }
}

/// Positional landmark set; removed entries stay as holes so indices hold
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Option<Landmark>>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Landmark>) -> Self {
        Self {
            points: points.into_iter().map(Some).collect(),
        }
    }

    /// Build from slots where None marks an entry the detector left out
    pub fn from_slots(points: Vec<Option<Landmark>>) -> Self {
        Self { points }
    }

    /// Landmark at `index`, or None when removed or out of range
    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.points.get(index).copied().flatten()
    }

    pub fn remove(&mut self, index: usize) {
        if let Some(slot) = self.points.get_mut(index) {
            *slot = None;
        }
    }

    /// Number of slots, including removed ones
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of landmarks still present
    pub fn present(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }
}

impl FromIterator<Landmark> for LandmarkSet {
    fn from_iter<T: IntoIterator<Item = Landmark>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Remove head and pose hand points from the pose set, in place.
/// Does nothing when the detector found no subject.
pub fn redact_for_display(pose: Option<&mut LandmarkSet>) {
    if let Some(pose) = pose {
        for (index, _) in REDACTED_POSE_LANDMARKS.iter() {
            pose.remove(*index);
        }
    }
}
