//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod error;
mod options;
mod results;
mod session;

pub use error::BridgeError;
pub use options::{
    // WASM entry points
    locate_holistic_file,
    overlay_options,
    overlay_options_from_json,
    // Internal API
    CameraOptions,
    HolisticOptions,
    OverlayOptions,
    HOLISTIC_CDN,
};
pub use results::{landmark_set_from_entries, LandmarkFields};
pub use session::{Camera, ElbowSession, Holistic};
