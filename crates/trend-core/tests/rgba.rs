// File: crates/trend-core/tests/rgba.rs
// Purpose: Validate RGB buffer shape and CSS color literal parsing.

use trend_core::{ChartConfig, ChartController, Rgba, Surface};

#[test]
fn render_rgb8_buffer_shape() {
    let mut cfg = ChartConfig::temperature_trend();
    cfg.draw_labels = false; // avoid font variance

    let mut ctl = ChartController::new(Surface::new("tempChart", 160, 120));
    let inst = ctl
        .render(&cfg, &["a".to_string(), "b".to_string()], &[0.0, 4.0])
        .expect("render");

    let (w, h) = (inst.width() as usize, inst.height() as usize);
    assert_eq!(inst.pixels().len(), w * h * 3);

    // Top-left pixel sits in the margin: white background.
    assert_eq!(&inst.pixels()[..3], &[255, 255, 255]);
}

#[test]
fn parse_hex_literals() {
    assert_eq!(Rgba::parse("#2196f3"), Ok(Rgba::opaque(0x21, 0x96, 0xf3)));
    assert_eq!(Rgba::parse("#eee"), Ok(Rgba::opaque(0xee, 0xee, 0xee)));
    assert_eq!(Rgba::parse(" #EEE "), Ok(Rgba::opaque(0xee, 0xee, 0xee)));
}

#[test]
fn parse_rgba_literal() {
    let c = Rgba::parse("rgba(33,150,243,0.08)").expect("parse rgba");
    assert_eq!((c.r, c.g, c.b), (33, 150, 243));
    assert!((c.a - 0.08).abs() < 1e-12);

    assert_eq!(Rgba::parse("rgb(33, 150, 243)"), Ok(Rgba::opaque(33, 150, 243)));
}

#[test]
fn parse_rejects_malformed_literals() {
    assert!(Rgba::parse("blue").is_err());
    assert!(Rgba::parse("#12").is_err());
    assert!(Rgba::parse("rgba(1,2)").is_err());
    assert!(Rgba::parse("rgba(1,2,3,4.0)").is_err());
}

#[test]
fn preset_colors_match_upstream_literals() {
    let cfg = ChartConfig::temperature_trend();
    assert_eq!(Ok(cfg.border_color), Rgba::parse("#2196f3"));
    assert_eq!(Ok(cfg.background_color), Rgba::parse("rgba(33,150,243,0.08)"));
    assert_eq!(Ok(cfg.grid_color), Rgba::parse("#eee"));
}
