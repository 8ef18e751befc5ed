//! Shape primitives - pixel coverage for circles and lines

/// Lines shorter than this draw nothing
const MIN_LINE_LENGTH: f32 = 0.001;

/// Pixel rectangle `[x0, x1) × [y0, y1)` covering the given extent,
/// clipped to the surface. None when it falls entirely outside.
pub fn pixel_bounds(
    min: (f32, f32),
    max: (f32, f32),
    width: u32,
    height: u32,
) -> Option<(u32, u32, u32, u32)> {
    if !(min.0.is_finite() && min.1.is_finite() && max.0.is_finite() && max.1.is_finite()) {
        return None;
    }

    let x0 = min.0.floor().max(0.0) as u32;
    let y0 = min.1.floor().max(0.0) as u32;
    let x1 = (max.0.ceil().max(0.0) as u32).min(width);
    let y1 = (max.1.ceil().max(0.0) as u32).min(height);

    if x0 >= x1 || y0 >= y1 {
        None
    } else {
        Some((x0, y0, x1, y1))
    }
}

/// Distance from `p` to the segment `a`-`b`
pub fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let len_sq = dx * dx + dy * dy;

    let t = if len_sq > 0.0 {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let cx = a.0 + t * dx - p.0;
    let cy = a.1 + t * dy - p.1;
    (cx * cx + cy * cy).sqrt()
}

/// Whether pixel center `p` lies inside a filled circle
pub fn covers_circle(p: (f32, f32), center: (f32, f32), radius: f32) -> bool {
    let dx = p.0 - center.0;
    let dy = p.1 - center.1;
    dx * dx + dy * dy <= radius * radius
}

/// Whether pixel center `p` lies inside a stroked line (butt caps)
pub fn covers_line(p: (f32, f32), a: (f32, f32), b: (f32, f32), width: f32) -> bool {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let len = (dx * dx + dy * dy).sqrt();

    if len < MIN_LINE_LENGTH {
        return false;
    }

    // Projection must fall within the segment, no rounded caps
    let t = ((p.0 - a.0) * dx + (p.1 - a.1) * dy) / (len * len);
    if !(0.0..=1.0).contains(&t) {
        return false;
    }

    distance_to_segment(p, a, b) <= width / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_clipped() {
        assert_eq!(pixel_bounds((-5.0, -5.0), (3.2, 2.5), 10, 10), Some((0, 0, 4, 3)));
        assert_eq!(pixel_bounds((8.5, 8.5), (20.0, 20.0), 10, 10), Some((8, 8, 10, 10)));
        assert_eq!(pixel_bounds((12.0, 0.0), (15.0, 4.0), 10, 10), None);
        assert_eq!(pixel_bounds((f32::NAN, 0.0), (1.0, 1.0), 10, 10), None);
    }

    #[test]
    fn test_segment_distance() {
        assert_eq!(distance_to_segment((5.0, 3.0), (0.0, 0.0), (10.0, 0.0)), 3.0);
        // Past the end measures to the endpoint
        assert_eq!(distance_to_segment((13.0, 4.0), (0.0, 0.0), (10.0, 0.0)), 5.0);
    }

    #[test]
    fn test_line_coverage() {
        let (a, b) = ((0.0, 5.0), (10.0, 5.0));
        assert!(covers_line((4.5, 5.5), a, b, 3.0));
        assert!(!covers_line((4.5, 7.5), a, b, 3.0));
        assert!(!covers_line((11.0, 5.0), a, b, 3.0));
        assert!(!covers_line((1.0, 1.0), (1.0, 1.0), (1.0, 1.0), 3.0));
    }

    #[test]
    fn test_circle_coverage() {
        assert!(covers_circle((10.5, 10.5), (10.0, 10.0), 1.0));
        assert!(!covers_circle((13.5, 10.5), (10.0, 10.0), 3.0));
    }
}
