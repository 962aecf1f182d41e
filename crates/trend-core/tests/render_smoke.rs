// File: crates/trend-core/tests/render_smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use trend_core::{ChartConfig, ChartController, Surface};

fn test_config() -> ChartConfig {
    let mut cfg = ChartConfig::temperature_trend();
    cfg.draw_labels = false; // avoid font variance
    cfg
}

#[test]
fn render_smoke_png() {
    let mut ctl = ChartController::new(Surface::new("tempChart", 320, 200));
    let labels: Vec<String> = ["Aug 23", "Aug 24", "Aug 25", "Aug 26", "Aug 27"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    ctl.render(&test_config(), &labels, &[18.5, 21.0, 19.5, 24.0, 22.5])
        .expect("render should succeed");

    let inst = ctl.instance().expect("instance present");
    let bytes = inst.to_png_bytes().expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let decoded = image::load_from_memory(&bytes).expect("decodable PNG");
    assert_eq!((decoded.width(), decoded.height()), (320, 200));

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    inst.write_png(&out).expect("write png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn non_responsive_render_uses_default_size() {
    let mut cfg = test_config();
    cfg.responsive = false;
    let mut ctl = ChartController::new(Surface::new("tempChart", 320, 200));
    let inst = ctl
        .render(&cfg, &["a".to_string(), "b".to_string()], &[1.0, 2.0])
        .expect("render");
    assert_eq!(
        (inst.width(), inst.height()),
        (trend_core::types::WIDTH, trend_core::types::HEIGHT)
    );
}
