use approx::assert_abs_diff_eq;

use pinpoint_core::geometry::PixelPos;
use pinpoint_core::transform::{to_physical, PhysicalCoord};

#[test]
fn test_worked_example() {
    let c = to_physical(PixelPos::new(150, 130), PixelPos::new(100, 100), 2.0, 0.1);
    assert_abs_diff_eq!(c.x, 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.y, 6.0, epsilon = 1e-12);
    assert_eq!(c.to_string(), "(10.000, 6.000)");
}

#[test]
fn test_matches_formula_over_grid() {
    let origin = PixelPos::new(37, -12);
    for &s in &[0.25, 1.0, 3.5] {
        for &u in &[0.001, 0.1, 2.0] {
            for &(px, py) in &[(0, 0), (37, -12), (500, 3), (-40, 900)] {
                let c = to_physical(PixelPos::new(px, py), origin, s, u);
                let ex = f64::from(px - origin.x) * u * s;
                let ey = f64::from(py - origin.y) * u * s;
                assert_abs_diff_eq!(c.x, ex, epsilon = 1e-9);
                assert_abs_diff_eq!(c.y, ey, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_origin_maps_to_zero() {
    let o = PixelPos::new(64, 48);
    assert_eq!(to_physical(o, o, 1.7, 0.3), PhysicalCoord { x: 0.0, y: 0.0 });
}

#[test]
fn test_screen_y_grows_downward() {
    // Clicking above the origin gives a negative y.
    let c = to_physical(PixelPos::new(100, 90), PixelPos::new(100, 100), 1.0, 0.1);
    assert!(c.y < 0.0);
    assert_eq!(c.to_string(), "(0.000, -1.000)");
}

#[test]
fn test_no_internal_rounding() {
    let c = to_physical(PixelPos::new(1, 0), PixelPos::new(0, 0), 1.0, 0.00012345);
    assert_abs_diff_eq!(c.x, 0.00012345, epsilon = 1e-15);
    assert_eq!(c.to_string(), "(0.000, 0.000)");
}

#[test]
fn test_full_i32_range_does_not_overflow() {
    let cases = [
        (PixelPos::new(i32::MIN, 0), PixelPos::new(1, 0)),
        (PixelPos::new(i32::MAX, i32::MIN), PixelPos::new(i32::MIN, i32::MAX)),
        (PixelPos::new(i32::MIN, i32::MAX), PixelPos::new(i32::MAX, i32::MIN)),
    ];
    for (pixel, origin) in cases {
        let c = to_physical(pixel, origin, 1.0, 0.1);
        let ex = (f64::from(pixel.x) - f64::from(origin.x)) * 0.1;
        let ey = (f64::from(pixel.y) - f64::from(origin.y)) * 0.1;
        assert_abs_diff_eq!(c.x, ex, epsilon = 1e-6);
        assert_abs_diff_eq!(c.y, ey, epsilon = 1e-6);
    }

    let c = to_physical(PixelPos::new(i32::MIN, 0), PixelPos::new(1, 0), 1.0, 0.1);
    assert_abs_diff_eq!(c.x, -214_748_364.9, epsilon = 1e-6);
}
