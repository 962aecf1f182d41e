// File: crates/trend-core/tests/host.rs
// Purpose: Validate surface resolution and the per-surface controller map.

use trend_core::{ChartConfig, ChartError, Host, Surface};

fn test_config() -> ChartConfig {
    let mut cfg = ChartConfig::temperature_trend();
    cfg.draw_labels = false; // avoid font variance
    cfg
}

#[test]
fn unregistered_surface_errors() {
    let mut host = Host::new();
    let err = host
        .render_line("tempChart", &test_config(), &[], &[])
        .expect_err("missing surface must fail");
    assert_eq!(
        err.downcast_ref::<ChartError>(),
        Some(&ChartError::SurfaceNotFound("tempChart".to_string()))
    );
    assert_eq!(host.live_instances(), 0);
}

#[test]
fn render_binds_controller_to_registered_surface() {
    let mut host = Host::new();
    host.register_surface(Surface::new("tempChart", 240, 160));
    assert!(host.registry().contains("tempChart"));
    assert_eq!(host.registry().len(), 1);

    let labels: Vec<String> = ["t1", "t2", "t3"].iter().map(|s| s.to_string()).collect();
    host.render_line("tempChart", &test_config(), &labels, &[10.0, 12.0, 9.0])
        .expect("render");
    host.render_line("tempChart", &test_config(), &labels, &[11.0, 13.0, 8.0])
        .expect("re-render");

    assert_eq!(host.live_instances(), 1);
    let inst = host
        .controller("tempChart")
        .and_then(|c| c.instance())
        .expect("instance present");
    assert_eq!(inst.values(), &[11.0, 13.0, 8.0]);
    assert_eq!(inst.labels(), &labels[..]);
    // Responsive sizing follows the registered surface.
    assert_eq!((inst.width(), inst.height()), (240, 160));
}

#[test]
fn reregistering_surface_drops_old_controller() {
    let mut host = Host::new();
    host.register_surface(Surface::new("tempChart", 240, 160));
    host.render_line("tempChart", &test_config(), &[], &[])
        .expect("render");
    assert_eq!(host.live_instances(), 1);

    host.register_surface(Surface::new("tempChart", 480, 320));
    assert_eq!(host.live_instances(), 0);

    host.render_line("tempChart", &test_config(), &[], &[])
        .expect("render on replacement surface");
    let inst = host
        .controller("tempChart")
        .and_then(|c| c.instance())
        .expect("instance present");
    assert_eq!((inst.width(), inst.height()), (480, 320));
}
