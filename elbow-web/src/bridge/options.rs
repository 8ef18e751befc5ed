//! Detector and camera options handed to the JS glue
//!
//! Serialized with camelCase keys so the object can go straight into
//! `holistic.setOptions(...)` and the camera driver constructor.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::BridgeError;

/// Where the Holistic model files are fetched from
pub const HOLISTIC_CDN: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/holistic/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HolisticOptions {
    /// 0 = lite, 1 = full, 2 = heavy
    pub model_complexity: u8,
    pub smooth_landmarks: bool,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for HolisticOptions {
    fn default() -> Self {
        Self {
            model_complexity: 1,
            smooth_landmarks: true,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraOptions {
    /// Requested capture size; the stream may negotiate another
    pub width: u32,
    pub height: u32,
    pub model_base_url: String,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            model_base_url: HOLISTIC_CDN.to_string(),
        }
    }
}

impl CameraOptions {
    /// Full URL of a model asset requested by the detector
    pub fn locate_file(&self, file: &str) -> String {
        if self.model_base_url.ends_with('/') {
            format!("{}{}", self.model_base_url, file)
        } else {
            format!("{}/{}", self.model_base_url, file)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    pub holistic: HolisticOptions,
    pub camera: CameraOptions,
}

impl OverlayOptions {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(json).map_err(BridgeError::Options)
    }

    pub fn to_json(&self) -> Result<String, BridgeError> {
        serde_json::to_string(self).map_err(BridgeError::Options)
    }

    fn to_js(&self) -> Result<JsValue, BridgeError> {
        let json = self.to_json()?;
        js_sys::JSON::parse(&json).map_err(|e| BridgeError::Js(format!("{:?}", e)))
    }
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Default options as a plain JS object `{ holistic, camera }`
#[wasm_bindgen]
pub fn overlay_options() -> Result<JsValue, JsValue> {
    Ok(OverlayOptions::default().to_js()?)
}

/// Defaults merged with a JSON string of overrides
#[wasm_bindgen]
pub fn overlay_options_from_json(json: &str) -> Result<JsValue, JsValue> {
    Ok(OverlayOptions::from_json(json)?.to_js()?)
}

/// Model asset URL for Holistic's `locateFile` hook
#[wasm_bindgen]
pub fn locate_holistic_file(file: &str) -> String {
    CameraOptions::default().locate_file(file)
}
