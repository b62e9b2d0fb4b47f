use pinpoint_core::export::ExportReport;
use pinpoint_core::geometry::PixelPos;
use pinpoint_core::session::Session;

fn sample_session() -> Session {
    let mut s = Session::default();
    s.set_origin(PixelPos::new(100, 100));
    s.set_scale_factor(2.0).unwrap();
    s.add_point(PixelPos::new(150, 130));
    s.add_point(PixelPos::new(90, 80));
    s
}

#[test]
fn test_no_origin_no_report() {
    assert!(ExportReport::from_session(&Session::default()).is_none());
}

#[test]
fn test_report_contents() {
    let report = ExportReport::from_session(&sample_session()).unwrap();
    assert_eq!(report.origin, PixelPos::new(100, 100));
    assert_eq!(report.scale_factor, 2.0);
    assert_eq!(report.unit_per_pixel, 0.1);
    assert_eq!(report.points.len(), 2);
    assert_eq!(report.points[1].sequence_index, 2);
    assert_eq!(report.points[1].physical.to_string(), "(-2.000, -4.000)");
}

#[test]
fn test_report_display() {
    let report = ExportReport::from_session(&sample_session()).unwrap();
    let text = report.to_string();
    let expected = "\
Origin: (100.000, 100.000)
Scale factor: 2.000, unit per pixel: 0.100
Point 1: pixel (150.000, 130.000), relative (10.000, 6.000)
Point 2: pixel (90.000, 80.000), relative (-2.000, -4.000)";
    assert_eq!(text, expected);
}

#[test]
fn test_export_does_not_mutate() {
    let session = sample_session();
    let before = format!("{session:?}");
    let _ = ExportReport::from_session(&session);
    let _ = ExportReport::from_session(&session);
    assert_eq!(format!("{session:?}"), before);
}

#[test]
fn test_report_serializes() {
    let report = ExportReport::from_session(&sample_session()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["origin"]["x"], 100);
    assert_eq!(json["points"][0]["sequence_index"], 1);
    assert!((json["points"][0]["physical"]["x"].as_f64().unwrap() - 10.0).abs() < 1e-9);
}
