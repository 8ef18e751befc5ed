//! Detector subscription - one results callback per page visit
//!
//! `ElbowSession` registers itself as Holistic's results callback when the
//! camera page mounts and releases everything when it unmounts: the
//! callback is detached, the camera driver stopped, and every track of the
//! video's media stream stopped.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, HtmlVideoElement, MediaStreamTrack};

use super::results::frame_from_results;
use super::BridgeError;
use crate::overlay::ElbowOverlay;
use crate::pose::Side;
use crate::renderer::CanvasSurface;

#[wasm_bindgen]
extern "C" {
    /// MediaPipe Holistic detector instance
    pub type Holistic;

    #[wasm_bindgen(method, js_name = onResults)]
    fn on_results(this: &Holistic, callback: &js_sys::Function);

    /// camera_utils Camera feeding video frames to the detector
    pub type Camera;

    #[wasm_bindgen(method)]
    fn stop(this: &Camera) -> JsValue;
}

/// State shared between the session and its results callback
struct SessionState {
    overlay: ElbowOverlay<CanvasSurface>,
    video: HtmlVideoElement,
    /// Text elements for the [left, right] readouts
    readouts: [Option<Element>; 2],
}

impl SessionState {
    fn handle_results(&mut self, results: &JsValue) -> Result<(), BridgeError> {
        let frame = frame_from_results(results, &self.video)?;
        self.overlay.on_results(frame)?;

        for side in Side::BOTH {
            if let Some(element) = &self.readouts[side as usize] {
                element.set_text_content(Some(&self.overlay.readout(side)));
            }
        }
        Ok(())
    }
}

#[wasm_bindgen]
pub struct ElbowSession {
    state: Rc<RefCell<SessionState>>,
    holistic: Holistic,
    camera: Option<Camera>,
    video: HtmlVideoElement,
    callback: Option<Closure<dyn FnMut(JsValue)>>,
}

#[wasm_bindgen]
impl ElbowSession {
    /// Subscribe to detector results and start drawing onto `canvas`
    #[wasm_bindgen(constructor)]
    pub fn new(
        holistic: Holistic,
        camera: Option<Camera>,
        video: HtmlVideoElement,
        canvas: HtmlCanvasElement,
        left_readout: Option<Element>,
        right_readout: Option<Element>,
    ) -> Result<ElbowSession, JsValue> {
        let surface = CanvasSurface::new(canvas).map_err(BridgeError::from)?;
        let state = Rc::new(RefCell::new(SessionState {
            overlay: ElbowOverlay::new(surface),
            video: video.clone(),
            readouts: [left_readout, right_readout],
        }));

        let callback_state = Rc::clone(&state);
        let callback = Closure::wrap(Box::new(move |results: JsValue| {
            // The detector never re-enters, but a busy state must not panic
            let Ok(mut state) = callback_state.try_borrow_mut() else {
                return;
            };
            match state.handle_results(&results) {
                Ok(()) | Err(BridgeError::EmptyFrame) => {}
                Err(e) => console_warn!("Dropped frame: {}", e),
            }
        }) as Box<dyn FnMut(JsValue)>);

        holistic.on_results(callback.as_ref().unchecked_ref());
        console_log!("✅ Elbow session started");

        Ok(ElbowSession {
            state,
            holistic,
            camera,
            video,
            callback: Some(callback),
        })
    }

    /// Latest left elbow angle in degrees
    pub fn left_angle(&self) -> f32 {
        self.state.borrow().overlay.angle(Side::Left)
    }

    /// Latest right elbow angle in degrees
    pub fn right_angle(&self) -> f32 {
        self.state.borrow().overlay.angle(Side::Right)
    }

    pub fn left_readout(&self) -> String {
        self.state.borrow().overlay.readout(Side::Left)
    }

    pub fn right_readout(&self) -> String {
        self.state.borrow().overlay.readout(Side::Right)
    }

    pub fn is_active(&self) -> bool {
        self.callback.is_some()
    }

    /// Unsubscribe and release the camera. Safe to call more than once.
    pub fn stop(&mut self) {
        let Some(callback) = self.callback.take() else {
            return;
        };

        // Detach before the closure is freed so late frames hit a no-op.
        // The no-op is handed to JS because the session may be dropping.
        let idle = Closure::wrap(Box::new(|_: JsValue| {}) as Box<dyn FnMut(JsValue)>);
        self.holistic.on_results(idle.into_js_value().unchecked_ref());
        drop(callback);

        if let Some(camera) = &self.camera {
            let _ = camera.stop();
        }
        let released = stop_media_tracks(&self.video);
        console_log!("🛑 Elbow session stopped, {} camera track(s) released", released);
    }
}

impl Drop for ElbowSession {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Stop every track on the video's stream and detach it
fn stop_media_tracks(video: &HtmlVideoElement) -> u32 {
    let Some(stream) = video.src_object() else {
        return 0;
    };

    let tracks = stream.get_tracks();
    for track in tracks.iter() {
        track.unchecked_into::<MediaStreamTrack>().stop();
    }
    video.set_src_object(None);

    tracks.length()
}
