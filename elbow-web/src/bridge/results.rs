//! Holistic results parsing
//!
//! Converts the `results` object passed to `holistic.onResults` into a
//! typed `FrameResult`. Landmark arrays hold `{x, y, z, visibility?}`
//! objects; any of the three sets may be missing.

use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, HtmlVideoElement, ImageBitmap};

use super::BridgeError;
use crate::pose::{FrameResult, Landmark, LandmarkSet};
use crate::renderer::FrameImage;

pub const POSE_FIELD: &str = "poseLandmarks";
pub const LEFT_HAND_FIELD: &str = "leftHandLandmarks";
pub const RIGHT_HAND_FIELD: &str = "rightHandLandmarks";
pub const IMAGE_FIELD: &str = "image";

/// Raw numeric fields of one landmark entry as read from JS
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LandmarkFields {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub visibility: Option<f64>,
}

impl LandmarkFields {
    /// `x` and `y` must be finite; a missing or non-finite visibility is
    /// treated as not reported.
    pub fn to_landmark(self) -> Option<Landmark> {
        let x = self.x.filter(|v| v.is_finite())?;
        let y = self.y.filter(|v| v.is_finite())?;

        Some(Landmark {
            x: x as f32,
            y: y as f32,
            z: self.z.filter(|v| v.is_finite()).unwrap_or(0.0) as f32,
            visibility: self.visibility.filter(|v| v.is_finite()).map(|v| v as f32),
        })
    }
}

/// Positional set from raw entries. Null entries and entries without
/// usable coordinates become holes, so one bad point only disables what
/// depends on it.
pub fn landmark_set_from_entries<I>(entries: I) -> LandmarkSet
where
    I: IntoIterator<Item = Option<LandmarkFields>>,
{
    let slots = entries
        .into_iter()
        .map(|entry| entry.and_then(LandmarkFields::to_landmark))
        .collect();
    LandmarkSet::from_slots(slots)
}

fn number_field(object: &JsValue, field: &str) -> Option<f64> {
    Reflect::get(object, &JsValue::from_str(field))
        .ok()
        .and_then(|v| v.as_f64())
}

fn landmark_fields(item: &JsValue) -> Option<LandmarkFields> {
    if item.is_undefined() || item.is_null() {
        return None;
    }
    Some(LandmarkFields {
        x: number_field(item, "x"),
        y: number_field(item, "y"),
        z: number_field(item, "z"),
        visibility: number_field(item, "visibility"),
    })
}

/// Read one landmark set. None when the detector found no subject, or
/// when the field is not an array at all.
pub fn landmark_set(results: &JsValue, name: &str) -> Option<LandmarkSet> {
    let value = Reflect::get(results, &JsValue::from_str(name)).ok()?;
    if !Array::is_array(&value) {
        return None;
    }

    let array: Array = value.unchecked_into();
    Some(landmark_set_from_entries(
        array.iter().map(|item| landmark_fields(&item)),
    ))
}

/// The detector's processed frame, or the live video when it is not drawable
pub fn frame_image(results: &JsValue, video: &HtmlVideoElement) -> FrameImage {
    let image =
        Reflect::get(results, &JsValue::from_str(IMAGE_FIELD)).unwrap_or(JsValue::UNDEFINED);

    if image.is_instance_of::<HtmlCanvasElement>() {
        FrameImage::Canvas(image.unchecked_into())
    } else if image.is_instance_of::<ImageBitmap>() {
        FrameImage::Bitmap(image.unchecked_into())
    } else if image.is_instance_of::<HtmlVideoElement>() {
        FrameImage::Video(image.unchecked_into())
    } else {
        FrameImage::Video(video.clone())
    }
}

/// Assemble one frame sized to the video's native resolution.
/// Malformed landmark data never fails the frame; it only leaves holes.
pub fn frame_from_results(
    results: &JsValue,
    video: &HtmlVideoElement,
) -> Result<FrameResult<FrameImage>, BridgeError> {
    let (width, height) = (video.video_width(), video.video_height());
    if width == 0 || height == 0 {
        return Err(BridgeError::EmptyFrame);
    }

    let mut frame = FrameResult::new(frame_image(results, video), width, height);
    frame.pose = landmark_set(results, POSE_FIELD);
    frame.left_hand = landmark_set(results, LEFT_HAND_FIELD);
    frame.right_hand = landmark_set(results, RIGHT_HAND_FIELD);
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{
        process_frame, AngleReadings, Side, HAND_LANDMARK_COUNT, LEFT_ELBOW, LEFT_SHOULDER,
        POSE_LANDMARK_COUNT, RIGHT_ELBOW, RIGHT_SHOULDER,
    };
    use assert_approx_eq::assert_approx_eq;

    fn fields(x: f64, y: f64) -> LandmarkFields {
        LandmarkFields {
            x: Some(x),
            y: Some(y),
            z: Some(0.0),
            visibility: Some(0.9),
        }
    }

    fn pose_entries() -> Vec<Option<LandmarkFields>> {
        let mut entries = vec![Some(fields(0.5, 0.5)); POSE_LANDMARK_COUNT];
        entries[LEFT_SHOULDER] = Some(fields(0.3, 0.2));
        entries[LEFT_ELBOW] = Some(fields(0.3, 0.4));
        entries[RIGHT_SHOULDER] = Some(fields(0.7, 0.2));
        entries[RIGHT_ELBOW] = Some(fields(0.7, 0.4));
        entries
    }

    fn hand_entries(x: f64, y: f64) -> Vec<Option<LandmarkFields>> {
        let mut entries = vec![Some(fields(x + 0.05, y + 0.05)); HAND_LANDMARK_COUNT];
        entries[0] = Some(LandmarkFields { visibility: None, ..fields(x, y) });
        entries
    }

    #[test]
    fn test_pose_landmark_fields() {
        let lm = LandmarkFields {
            x: Some(0.25),
            y: Some(0.75),
            z: Some(-0.1),
            visibility: Some(0.9),
        }
        .to_landmark()
        .unwrap();
        assert_eq!(lm.x, 0.25);
        assert_eq!(lm.y, 0.75);
        assert_eq!(lm.z, -0.1);
        assert_eq!(lm.visibility, Some(0.9));
    }

    #[test]
    fn test_hand_landmark_has_no_visibility() {
        let lm = LandmarkFields { x: Some(0.5), y: Some(0.5), ..Default::default() };
        let parsed = lm.to_landmark().unwrap();
        assert_eq!(parsed.z, 0.0);
        assert_eq!(parsed.visibility, None);

        let nan = LandmarkFields { visibility: Some(f64::NAN), ..lm };
        assert_eq!(nan.to_landmark().unwrap().visibility, None);
    }

    #[test]
    fn test_missing_coordinates_rejected() {
        let no_x = LandmarkFields { y: Some(0.5), ..Default::default() };
        assert!(no_x.to_landmark().is_none());

        let infinite_y = LandmarkFields { x: Some(0.5), y: Some(f64::INFINITY), ..no_x };
        assert!(infinite_y.to_landmark().is_none());
    }

    #[test]
    fn test_malformed_entry_becomes_hole() {
        let entries = vec![
            Some(fields(0.1, 0.1)),
            Some(LandmarkFields { x: None, ..fields(0.2, 0.2) }),
            None,
            Some(fields(0.4, 0.4)),
        ];
        let set = landmark_set_from_entries(entries);

        assert_eq!(set.len(), 4);
        assert_eq!(set.present(), 2);
        assert!(set.get(1).is_none());
        assert!(set.get(2).is_none());
        assert_eq!(set.get(3).unwrap().x, 0.4);
    }

    #[test]
    fn test_malformed_elbow_only_disables_its_side() {
        let mut pose = pose_entries();
        pose[LEFT_ELBOW] = Some(LandmarkFields { x: None, ..fields(0.3, 0.4) });

        let mut frame = FrameResult::new((), 100, 100);
        frame.pose = Some(landmark_set_from_entries(pose));
        frame.left_hand = Some(landmark_set_from_entries(hand_entries(0.5, 0.4)));
        frame.right_hand = Some(landmark_set_from_entries(hand_entries(0.7, 0.6)));

        let mut readings = AngleReadings::new();
        readings.record(Side::Left, 42.0);
        let scene = process_frame(&mut frame, &mut readings);

        // Left side has nothing to anchor to; right side draws and updates
        assert!(scene.angle(Side::Left).is_none());
        assert_eq!(readings.get(Side::Left), 42.0);
        assert_approx_eq!(readings.get(Side::Right), 180.0, 0.01);
        assert_eq!(scene.connections.len(), 2);
    }
}
