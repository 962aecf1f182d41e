// File: crates/trend-core/src/render.rs
// Summary: Collaborator-library glue: fill area, smoothed stroke, point markers, mesh.

use anyhow::{anyhow, Result};
use log::info;
use plotters::prelude::*;

use crate::config::ChartConfig;
use crate::instance::ChartInstance;
use crate::smooth::cardinal_spline;
use crate::surface::Surface;
use crate::types::{HEIGHT, WIDTH};

/// Curve resolution when tension smoothing is active.
const SAMPLES_PER_SEGMENT: usize = 16;

/// Render one line chart onto `surface` and return the resulting instance.
/// The instance owns the pixel buffer; nothing is retained here.
pub fn render_line(
    surface: &Surface,
    cfg: &ChartConfig,
    labels: &[String],
    values: &[f64],
    generation: u64,
) -> Result<ChartInstance> {
    let (width, height) = if cfg.responsive {
        (surface.width, surface.height)
    } else {
        (WIDTH, HEIGHT)
    };
    let mut pixels = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| anyhow!("fill background: {e}"))?;

        let n = values.len();
        let x_max = if n > 1 { (n - 1) as f64 } else { 1.0 };
        let (mut y_min, y_max) = value_bounds(values);
        if cfg.begin_at_zero {
            y_min = y_min.min(0.0);
        }
        let pad = ((y_max - y_min) * 0.08).max(0.5);
        let y_lo = if cfg.begin_at_zero { y_min } else { y_min - pad };
        let y_hi = y_max + pad;

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(if cfg.draw_labels { 36 } else { 8 })
            .y_label_area_size(if cfg.draw_labels { 48 } else { 8 })
            .build_cartesian_2d(0.0..x_max, y_lo..y_hi)
            .map_err(|e| anyhow!("build chart area: {e}"))?;

        let grid = cfg.grid_color.to_plotters();
        if cfg.draw_labels {
            chart
                .configure_mesh()
                .bold_line_style(grid)
                .light_line_style(grid.mix(0.4))
                .x_labels(n.clamp(2, 12))
                .x_label_formatter(&|x: &f64| {
                    let i = x.round();
                    if i < 0.0 {
                        return String::new();
                    }
                    labels.get(i as usize).cloned().unwrap_or_default()
                })
                .y_label_formatter(&|y: &f64| format!("{y:.0}"))
                .draw()
                .map_err(|e| anyhow!("draw mesh: {e}"))?;
        } else {
            // No tick labels means no font lookup; headless tests rely on this.
            chart
                .configure_mesh()
                .bold_line_style(grid)
                .light_line_style(grid.mix(0.4))
                .x_labels(0)
                .y_labels(0)
                .draw()
                .map_err(|e| anyhow!("draw mesh: {e}"))?;
        }

        if n > 0 {
            let points: Vec<(f64, f64)> = values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect();
            let curve = if cfg.tension > 0.0 {
                cardinal_spline(&points, cfg.tension, SAMPLES_PER_SEGMENT)
            } else {
                points.clone()
            };

            if cfg.fill {
                chart
                    .draw_series(AreaSeries::new(
                        curve.iter().copied(),
                        y_lo,
                        cfg.background_color.to_plotters().filled(),
                    ))
                    .map_err(|e| anyhow!("draw fill area: {e}"))?;
            }

            let stroke = ShapeStyle {
                color: cfg.border_color.to_plotters(),
                filled: false,
                stroke_width: 2,
            };
            let anno = chart
                .draw_series(LineSeries::new(curve.iter().copied(), stroke))
                .map_err(|e| anyhow!("draw line: {e}"))?;
            if cfg.legend_visible {
                anno.label(cfg.dataset_label.clone()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 16, y)], stroke)
                });
            }

            chart
                .draw_series(points.iter().map(|&(x, y)| {
                    Circle::new((x, y), cfg.point_radius as i32, cfg.point_color.to_plotters().filled())
                }))
                .map_err(|e| anyhow!("draw point markers: {e}"))?;

            if cfg.legend_visible {
                chart
                    .configure_series_labels()
                    .border_style(grid)
                    .draw()
                    .map_err(|e| anyhow!("draw legend: {e}"))?;
            }
        }

        // Surface IO failures must not be swallowed silently.
        root.present().map_err(|e| anyhow!("present surface: {e}"))?;
    }

    info!(
        "rendered line chart surface='{}' points={} size={}x{} generation={}",
        surface.id,
        values.len(),
        width,
        height,
        generation
    );

    Ok(ChartInstance::new(
        surface.id.clone(),
        cfg.clone(),
        labels.to_vec(),
        values.to_vec(),
        generation,
        width,
        height,
        pixels,
    ))
}

fn value_bounds(values: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}
