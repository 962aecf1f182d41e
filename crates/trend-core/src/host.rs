// File: crates/trend-core/src/host.rs
// Summary: Process-wide host: surface registry plus one controller per surface.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use anyhow::{anyhow, Result};

use crate::config::ChartConfig;
use crate::controller::ChartController;
use crate::surface::{Surface, SurfaceRegistry, TEMP_CHART_SURFACE};

/// Stand-in for the hosting document: the registered surfaces and the
/// controllers bound to them. Tests build their own hosts; production code
/// goes through [`global`].
#[derive(Default)]
pub struct Host {
    registry: SurfaceRegistry,
    controllers: HashMap<String, ChartController>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface. Re-registering an id drops the controller (and
    /// instance) bound to the old surface.
    pub fn register_surface(&mut self, surface: Surface) {
        let id = surface.id.clone();
        if self.registry.register(surface).is_some() {
            self.controllers.remove(&id);
        }
    }

    pub fn registry(&self) -> &SurfaceRegistry {
        &self.registry
    }

    pub fn controller(&self, surface_id: &str) -> Option<&ChartController> {
        self.controllers.get(surface_id)
    }

    /// Total live instances across all surfaces.
    pub fn live_instances(&self) -> usize {
        self.controllers.values().map(ChartController::live_count).sum()
    }

    /// Render onto the surface registered under `surface_id`, creating its
    /// controller on first use. Fails when the id cannot be resolved.
    pub fn render_line(
        &mut self,
        surface_id: &str,
        cfg: &ChartConfig,
        labels: &[String],
        values: &[f64],
    ) -> Result<()> {
        let surface = self.registry.resolve(surface_id)?.clone();
        let controller = self
            .controllers
            .entry(surface.id.clone())
            .or_insert_with(|| ChartController::new(surface));
        controller.render(cfg, labels, values)?;
        Ok(())
    }
}

/// The process-wide host. Guarded by a mutex only because statics demand
/// one; the invocation model is single-caller.
pub fn global() -> &'static Mutex<Host> {
    static GLOBAL: OnceLock<Mutex<Host>> = OnceLock::new();
    GLOBAL.get_or_init(|| Mutex::new(Host::new()))
}

/// The externally callable render operation: plot `labels`/`values` as the
/// fixed "Temperature" line chart on the well-known surface of the global
/// host. The hosting process must have registered that surface first.
pub fn render_temp_chart(labels: &[String], values: &[f64]) -> Result<()> {
    let mut host = global()
        .lock()
        .map_err(|_| anyhow!("global chart host poisoned"))?;
    host.render_line(
        TEMP_CHART_SURFACE,
        &ChartConfig::temperature_trend(),
        labels,
        values,
    )
}
