// File: crates/trend-core/src/lib.rs
// Summary: Core library entry point; exports chart config, surfaces, controller, and rendering.

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod instance;
pub mod render;
pub mod smooth;
pub mod surface;
pub mod types;

pub use config::{ChartConfig, ChartKind};
pub use controller::ChartController;
pub use error::ChartError;
pub use host::{render_temp_chart, Host};
pub use instance::ChartInstance;
pub use smooth::cardinal_spline;
pub use surface::{Surface, SurfaceRegistry, TEMP_CHART_SURFACE};
pub use types::Rgba;
