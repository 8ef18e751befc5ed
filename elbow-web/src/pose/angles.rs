//! Elbow angle calculation using dot product
//!
//! Calculates the interior angle at the elbow joint between the forearm
//! (elbow→wrist) and the upper arm (elbow→shoulder).

/// Vectors shorter than this are treated as zero length
const MIN_VECTOR_LENGTH: f64 = 1e-6;

/// Interior angle at `elbow` in degrees, in [0, 180]
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns None when either vector has zero length or an input is not
/// finite, so callers can keep their previous reading.
///
/// Points are pixel coordinates in f64: `acos` is ill-conditioned near
/// ±1, so straight and fully folded arms need the wider type. Only the
/// result is narrowed.
pub fn interior_angle(
    wrist: (f64, f64),
    elbow: (f64, f64),
    shoulder: (f64, f64),
) -> Option<f32> {
    // Vector from elbow to wrist (forearm)
    let v1 = (wrist.0 - elbow.0, wrist.1 - elbow.1);

    // Vector from elbow to shoulder (upper arm)
    let v2 = (shoulder.0 - elbow.0, shoulder.1 - elbow.1);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;

    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    // NaN magnitudes fail this comparison too
    if !(mag1 >= MIN_VECTOR_LENGTH && mag2 >= MIN_VECTOR_LENGTH) || !dot.is_finite() {
        return None;
    }

    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    let degrees = cos_angle.acos().to_degrees();

    degrees.is_finite().then_some(degrees as f32)
}
