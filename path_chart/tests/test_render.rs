use path_chart::{render_path_chart, ChartError, ChartStyle};
use path_synth::{CandleBounds, PathSynthesizer, PricePath};
use tempfile::tempdir;

#[test]
fn test_render_writes_png() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("bullish_minute.png");

    let bounds = CandleBounds::new(1002.0, 1003.0, 1003.4, 1001.8).unwrap();
    let path = PathSynthesizer::default()
        .synthesize_seeded(&bounds, 11)
        .unwrap();

    render_path_chart(&path, &bounds, &output, &ChartStyle::default()).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert!(!bytes.is_empty());
    // PNG signature
    assert_eq!(&bytes[..4], b"\x89PNG");
}

#[test]
fn test_render_with_custom_dimensions() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("small.png");

    let bounds = CandleBounds::new(1001.0, 1000.5, 1001.2, 1000.3).unwrap();
    let path = PathSynthesizer::default()
        .synthesize_seeded(&bounds, 23)
        .unwrap();

    let style = ChartStyle::with_dimensions(400, 200).with_caption("Bearish Minute");
    render_path_chart(&path, &bounds, &output, &style).unwrap();

    assert!(output.exists());
}

#[test]
fn test_render_rejects_short_path() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("short.png");

    let bounds = CandleBounds::new(1002.0, 1003.0, 1003.4, 1001.8).unwrap();
    let path = PricePath::new(vec![1002.0]);

    match render_path_chart(&path, &bounds, &output, &ChartStyle::default()) {
        Err(ChartError::InvalidPath(_)) => {}
        other => panic!("Expected InvalidPath, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn test_render_rejects_non_finite_values() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("nan.png");

    let bounds = CandleBounds::new(1002.0, 1003.0, 1003.4, 1001.8).unwrap();
    let path = PricePath::new(vec![1002.0, f64::NAN, 1003.0]);

    match render_path_chart(&path, &bounds, &output, &ChartStyle::default()) {
        Err(ChartError::InvalidPath(_)) => {}
        other => panic!("Expected InvalidPath, got {:?}", other),
    }
}
