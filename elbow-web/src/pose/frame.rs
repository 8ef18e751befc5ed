//! Frame processing - detector results to scene description
//!
//! Turns one detector result into the connections and highlight points
//! to draw, and updates the retained elbow angle readings.

use super::angles::interior_angle;
use super::landmarks::{
    redact_for_display, Landmark, LandmarkSet, HAND_WRIST, LEFT_ELBOW, LEFT_SHOULDER,
    RIGHT_ELBOW, RIGHT_SHOULDER,
};

/// Segments with an endpoint below this visibility are not drawn
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

/// One detector callback worth of data
#[derive(Debug, Clone)]
pub struct FrameResult<I> {
    /// Camera frame handed back by the detector
    pub image: I,
    /// Native frame size in pixels
    pub width: u32,
    pub height: u32,
    pub pose: Option<LandmarkSet>,
    pub left_hand: Option<LandmarkSet>,
    pub right_hand: Option<LandmarkSet>,
}

impl<I> FrameResult<I> {
    pub fn new(image: I, width: u32, height: u32) -> Self {
        Self {
            image,
            width,
            height,
            pose: None,
            left_hand: None,
            right_hand: None,
        }
    }

    fn hand(&self, side: Side) -> Option<&LandmarkSet> {
        match side {
            Side::Left => self.left_hand.as_ref(),
            Side::Right => self.right_hand.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn elbow_index(self) -> usize {
        match self {
            Side::Left => LEFT_ELBOW,
            Side::Right => RIGHT_ELBOW,
        }
    }

    pub fn shoulder_index(self) -> usize {
        match self {
            Side::Left => LEFT_SHOULDER,
            Side::Right => RIGHT_SHOULDER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left elbow angle",
            Side::Right => "Right elbow angle",
        }
    }
}

/// What a highlight point marks; decides its circle style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointRole {
    Elbow,
    Shoulder,
    Wrist,
}

/// Line segment between two landmarks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: Landmark,
    pub to: Landmark,
}

impl Connection {
    /// Visibility only gates drawing, never geometry
    pub fn is_drawable(&self) -> bool {
        self.from.passes_visibility(VISIBILITY_THRESHOLD)
            && self.to.passes_visibility(VISIBILITY_THRESHOLD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub point: Landmark,
    pub role: JointRole,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub connections: Vec<Connection>,
    pub highlights: Vec<Highlight>,
    /// Angle computed this frame, if any: [left, right]
    pub angles: [Option<f32>; 2],
}

impl Scene {
    pub fn angle(&self, side: Side) -> Option<f32> {
        self.angles[side as usize]
    }
}

/// Latest elbow angle per side, retained across frames
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AngleReadings {
    left: f32,
    right: f32,
}

impl AngleReadings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Overwrite the reading; callers pass only valid angles
    pub fn record(&mut self, side: Side, degrees: f32) {
        match side {
            Side::Left => self.left = degrees,
            Side::Right => self.right = degrees,
        }
    }

    /// Two-decimal readout, e.g. "Left elbow angle: 90.00"
    pub fn readout(&self, side: Side) -> String {
        format!("{}: {:.2}", side.label(), self.get(side))
    }
}

/// Process one frame: redact, select connections, compute angles.
///
/// The pose set is redacted in place. Angles are taken in pixel space
/// and only overwrite `readings` when every required landmark is present
/// and the geometry is valid.
pub fn process_frame<I>(frame: &mut FrameResult<I>, readings: &mut AngleReadings) -> Scene {
    redact_for_display(frame.pose.as_mut());

    let mut scene = Scene::default();
    let (width, height) = (frame.width, frame.height);

    for side in Side::BOTH {
        let elbow = frame.pose.as_ref().and_then(|p| p.get(side.elbow_index()));
        let shoulder = frame.pose.as_ref().and_then(|p| p.get(side.shoulder_index()));
        let wrist = frame.hand(side).and_then(|h| h.get(HAND_WRIST));

        if let (Some(elbow), Some(wrist)) = (elbow, wrist) {
            scene.connections.push(Connection { from: elbow, to: wrist });
            scene.highlights.push(Highlight { point: wrist, role: JointRole::Wrist });
        }

        if let (Some(elbow), Some(shoulder)) = (elbow, shoulder) {
            scene.connections.push(Connection { from: elbow, to: shoulder });
            scene.highlights.push(Highlight { point: elbow, role: JointRole::Elbow });
            scene.highlights.push(Highlight { point: shoulder, role: JointRole::Shoulder });
        }

        if let (Some(elbow), Some(shoulder), Some(wrist)) = (elbow, shoulder, wrist) {
            let angle = interior_angle(
                wrist.pixel_point(width, height),
                elbow.pixel_point(width, height),
                shoulder.pixel_point(width, height),
            );
            if let Some(degrees) = angle {
                readings.record(side, degrees);
            }
            scene.angles[side as usize] = angle;
        }
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::landmarks::{HAND_LANDMARK_COUNT, POSE_LANDMARK_COUNT};
    use assert_approx_eq::assert_approx_eq;

    fn pose_with(points: &[(usize, Landmark)]) -> LandmarkSet {
        let mut all = vec![Landmark::new(0.5, 0.5).with_visibility(0.9); POSE_LANDMARK_COUNT];
        for (idx, lm) in points {
            all[*idx] = *lm;
        }
        LandmarkSet::new(all)
    }

    fn hand_at(x: f32, y: f32) -> LandmarkSet {
        let mut all = vec![Landmark::new(x + 0.05, y + 0.05); HAND_LANDMARK_COUNT];
        all[HAND_WRIST] = Landmark::new(x, y);
        LandmarkSet::new(all)
    }

    /// Left arm bent at a right angle, right arm straight
    fn two_arm_frame() -> FrameResult<()> {
        let mut frame = FrameResult::new((), 100, 100);
        frame.pose = Some(pose_with(&[
            (LEFT_SHOULDER, Landmark::new(0.3, 0.2)),
            (LEFT_ELBOW, Landmark::new(0.3, 0.4)),
            (RIGHT_SHOULDER, Landmark::new(0.7, 0.2)),
            (RIGHT_ELBOW, Landmark::new(0.7, 0.4)),
        ]));
        frame.left_hand = Some(hand_at(0.5, 0.4));
        frame.right_hand = Some(hand_at(0.7, 0.6));
        frame
    }

    #[test]
    fn test_full_frame_scene() {
        let mut frame = two_arm_frame();
        let mut readings = AngleReadings::new();
        let scene = process_frame(&mut frame, &mut readings);

        assert_eq!(scene.connections.len(), 4);
        assert_eq!(scene.highlights.len(), 6);
        assert_approx_eq!(readings.get(Side::Left), 90.0, 0.01);
        assert_approx_eq!(readings.get(Side::Right), 180.0, 0.01);
        assert_eq!(readings.readout(Side::Left), "Left elbow angle: 90.00");
        assert_eq!(readings.readout(Side::Right), "Right elbow angle: 180.00");
    }

    #[test]
    fn test_pose_is_redacted_in_place() {
        let mut frame = two_arm_frame();
        process_frame(&mut frame, &mut AngleReadings::new());

        let pose = frame.pose.as_ref().unwrap();
        assert!(pose.get(0).is_none());
        assert!(pose.get(15).is_none());
        assert!(pose.get(LEFT_ELBOW).is_some());
        // Hand sets are left alone
        assert_eq!(frame.left_hand.as_ref().unwrap().present(), HAND_LANDMARK_COUNT);
    }

    #[test]
    fn test_missing_left_hand_keeps_reading() {
        let mut readings = AngleReadings::new();
        process_frame(&mut two_arm_frame(), &mut readings);
        let before = readings.get(Side::Left);

        let mut frame = two_arm_frame();
        frame.left_hand = None;
        frame.right_hand = Some(hand_at(0.9, 0.4));
        let scene = process_frame(&mut frame, &mut readings);

        assert_eq!(readings.get(Side::Left), before);
        assert!(scene.angle(Side::Left).is_none());
        // Right side still updates
        assert_approx_eq!(readings.get(Side::Right), 90.0, 0.01);
        // Left elbow→shoulder is still drawn without a hand
        let wrists = scene.highlights.iter().filter(|h| h.role == JointRole::Wrist).count();
        assert_eq!(wrists, 1);
        assert_eq!(scene.connections.len(), 3);
    }

    #[test]
    fn test_missing_pose_draws_nothing() {
        let mut frame = two_arm_frame();
        frame.pose = None;
        let mut readings = AngleReadings::new();
        readings.record(Side::Left, 42.0);

        let scene = process_frame(&mut frame, &mut readings);

        assert!(scene.connections.is_empty());
        assert!(scene.highlights.is_empty());
        assert_eq!(readings.get(Side::Left), 42.0);
        assert_eq!(readings.get(Side::Right), 0.0);
    }

    #[test]
    fn test_degenerate_geometry_keeps_reading() {
        let mut frame = two_arm_frame();
        // Wrist on top of the elbow
        frame.left_hand = Some(hand_at(0.3, 0.4));
        let mut readings = AngleReadings::new();
        readings.record(Side::Left, 120.0);

        let scene = process_frame(&mut frame, &mut readings);

        assert_eq!(readings.get(Side::Left), 120.0);
        assert!(scene.angle(Side::Left).is_none());
        assert!(!readings.get(Side::Left).is_nan());
    }

    #[test]
    fn test_low_visibility_still_computes_angle() {
        let mut frame = two_arm_frame();
        frame.pose = Some(pose_with(&[
            (LEFT_SHOULDER, Landmark::new(0.3, 0.2).with_visibility(0.02)),
            (LEFT_ELBOW, Landmark::new(0.3, 0.4).with_visibility(0.05)),
        ]));
        let mut readings = AngleReadings::new();
        let scene = process_frame(&mut frame, &mut readings);

        assert_approx_eq!(readings.get(Side::Left), 90.0, 0.01);
        let drawable = scene.connections.iter().filter(|c| c.is_drawable()).count();
        assert!(drawable < scene.connections.len());
    }

    #[test]
    fn test_angle_uses_pixel_space() {
        // 45° in normalized space becomes ~60.6° on a 16:9 frame
        let mut frame = FrameResult::new((), 1600, 900);
        frame.pose = Some(pose_with(&[
            (LEFT_SHOULDER, Landmark::new(0.5, 0.3)),
            (LEFT_ELBOW, Landmark::new(0.5, 0.5)),
        ]));
        frame.left_hand = Some(hand_at(0.7, 0.3));
        let mut readings = AngleReadings::new();
        process_frame(&mut frame, &mut readings);

        let expected = (320.0_f32).atan2(180.0).to_degrees();
        assert_approx_eq!(readings.get(Side::Left), expected, 0.01);
    }

    #[test]
    fn test_connection_visibility_gate() {
        let low = Connection {
            from: Landmark::new(0.1, 0.1).with_visibility(0.05),
            to: Landmark::new(0.2, 0.2).with_visibility(0.5),
        };
        let good = Connection {
            from: Landmark::new(0.1, 0.1).with_visibility(0.5),
            to: Landmark::new(0.2, 0.2).with_visibility(0.5),
        };
        assert!(!low.is_drawable());
        assert!(good.is_drawable());
    }

    #[test]
    fn test_straight_arm_reads_180_at_camera_resolution() {
        // Diagonal straight arm on a 1280x720 frame
        let mut frame = FrameResult::new((), 1280, 720);
        frame.pose = Some(pose_with(&[
            (RIGHT_SHOULDER, Landmark::new(0.41, 0.33)),
            (RIGHT_ELBOW, Landmark::new(0.53, 0.49)),
        ]));
        frame.right_hand = Some(hand_at(0.62, 0.61));
        let mut readings = AngleReadings::new();
        process_frame(&mut frame, &mut readings);

        assert_approx_eq!(readings.get(Side::Right), 180.0, 0.01);
        assert_eq!(readings.readout(Side::Right), "Right elbow angle: 180.00");
    }
}
