use crate::core::data::complex::Complex;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::zoom::errors::ZoomError;

/// Moves `min` and `max` toward `focus`, each by `fraction` of its own
/// distance to the focus.
fn shrink_axis(min: f64, max: f64, focus: f64, fraction: f64) -> (f64, f64) {
    (min + (focus - min) * fraction, max - (max - focus) * fraction)
}

/// Next frame's viewport.
///
/// Each bound moves toward the focus by `shrink_percent` of its distance to
/// the focus. The span shrinks by that percentage and the focus keeps its
/// relative position in the view, so an off-centre focus stays off-centre
/// while the viewport closes in on it. `shrink_percent` must lie in `[0, 100)`.
pub fn shrink_region(
    region: PlaneRegion,
    focus: Complex,
    shrink_percent: f64,
) -> Result<PlaneRegion, ZoomError> {
    if !(0.0..100.0).contains(&shrink_percent) {
        return Err(ZoomError::InvalidShrinkPercent(shrink_percent));
    }

    let fraction = shrink_percent / 100.0;
    let (x_min, x_max) = shrink_axis(region.x_min(), region.x_max(), focus.real, fraction);
    let (y_min, y_max) = shrink_axis(region.y_min(), region.y_max(), focus.imag, fraction);

    Ok(PlaneRegion::new(x_min, x_max, y_min, y_max)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::plane_region::PlaneRegionError;

    fn region() -> PlaneRegion {
        PlaneRegion::new(-1.0, 2.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_zero_percent_is_identity() {
        let focus = Complex::new(0.3, -0.4);

        assert_eq!(shrink_region(region(), focus, 0.0), Ok(region()));
    }

    #[test]
    fn test_bounds_move_toward_focus() {
        let shrunk = shrink_region(region(), Complex::new(0.0, 0.0), 20.0).unwrap();

        assert!((shrunk.x_min() - (-0.8)).abs() < 1e-12);
        assert!((shrunk.x_max() - 1.6).abs() < 1e-12);
        assert!((shrunk.y_min() - (-0.8)).abs() < 1e-12);
        assert!((shrunk.y_max() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_span_shrinks_by_percentage() {
        let shrunk = shrink_region(region(), Complex::new(1.7, 0.9), 25.0).unwrap();

        assert!((shrunk.width() - 2.25).abs() < 1e-12);
        assert!((shrunk.height() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_focus_stays_inside_across_frames() {
        let focus = Complex::new(1.9, -0.95);
        let mut current = region();

        for _ in 0..50 {
            current = shrink_region(current, focus, 20.0).unwrap();
            assert!(current.contains_point(focus));
        }
    }

    #[test]
    fn test_off_centre_focus_keeps_relative_offset() {
        // moving both bounds by the same fraction of their distance keeps the
        // focus at the same relative position; it does not recentre in one step
        let focus = Complex::new(1.4, 0.6);
        let shrunk = shrink_region(region(), focus, 50.0).unwrap();

        assert!((shrunk.x_min() - 0.2).abs() < 1e-12);
        assert!((shrunk.x_max() - 1.7).abs() < 1e-12);
        assert!((shrunk.y_min() - (-0.2)).abs() < 1e-12);
        assert!((shrunk.y_max() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_percent_out_of_range() {
        let focus = Complex::new(0.0, 0.0);

        assert_eq!(
            shrink_region(region(), focus, 100.0),
            Err(ZoomError::InvalidShrinkPercent(100.0))
        );
        assert_eq!(
            shrink_region(region(), focus, -5.0),
            Err(ZoomError::InvalidShrinkPercent(-5.0))
        );
        assert!(shrink_region(region(), focus, f64::NAN).is_err());
    }

    #[test]
    fn test_collapse_at_f64_precision_is_reported() {
        let tiny = PlaneRegion::new(1.0, 1.0 + f64::EPSILON, 1.0, 1.0 + f64::EPSILON).unwrap();
        let result = shrink_region(tiny, Complex::new(1.0, 1.0), 99.0);

        assert!(matches!(
            result,
            Err(ZoomError::RegionCollapsed(PlaneRegionError::InvalidSize { .. }))
        ));
    }
}
