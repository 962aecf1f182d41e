// File: crates/trend-core/src/config.rs
// Summary: Typed chart configuration; one fixed preset for the temperature trend.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
}

/// Declarative configuration handed to the renderer. The fields mirror the
/// options the collaborator library understands; nothing here is computed
/// from data.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub dataset_label: String,
    pub border_color: Rgba,
    pub background_color: Rgba,
    /// Fill the area under the line with `background_color`.
    pub fill: bool,
    /// Curve smoothing factor in [0, 1]; 0 draws straight segments.
    pub tension: f64,
    /// Radius of the circular point markers, in pixels.
    pub point_radius: u32,
    pub point_color: Rgba,
    /// When false the y axis spans the data range instead of anchoring at 0.
    pub begin_at_zero: bool,
    pub grid_color: Rgba,
    pub legend_visible: bool,
    /// Size the render to the surface rather than the library default.
    pub responsive: bool,
    /// Tick labels need a usable font; tests turn this off to avoid font
    /// variance on headless machines.
    pub draw_labels: bool,
}

impl ChartConfig {
    /// The fixed temperature-trend preset: blue smoothed line over a faint
    /// fill, round markers, light gridlines, no legend.
    pub fn temperature_trend() -> Self {
        Self {
            kind: ChartKind::Line,
            dataset_label: "Temperature".to_string(),
            border_color: Rgba::opaque(0x21, 0x96, 0xf3), // #2196f3
            background_color: Rgba::new(33, 150, 243, 0.08), // rgba(33,150,243,0.08)
            fill: true,
            tension: 0.4,
            point_radius: 5,
            point_color: Rgba::opaque(0x21, 0x96, 0xf3),
            begin_at_zero: false,
            grid_color: Rgba::opaque(0xee, 0xee, 0xee), // #eee
            legend_visible: false,
            responsive: true,
            draw_labels: true,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::temperature_trend()
    }
}
