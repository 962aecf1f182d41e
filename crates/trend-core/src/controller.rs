// File: crates/trend-core/src/controller.rs
// Summary: Owns one surface's instance slot; destroy-before-create on every render.

use anyhow::{Context, Result};
use log::debug;

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::instance::ChartInstance;
use crate::render::render_line;
use crate::surface::Surface;

/// At most one live chart instance per surface. Each render releases the
/// prior instance (a no-op when the slot is empty) before drawing the new
/// one, so repeated calls never stack stale overlays.
pub struct ChartController {
    surface: Surface,
    slot: Option<ChartInstance>,
    next_generation: u64,
}

impl ChartController {
    pub fn new(surface: Surface) -> Self {
        Self { surface, slot: None, next_generation: 1 }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn instance(&self) -> Option<&ChartInstance> {
        self.slot.as_ref()
    }

    /// Number of live instances bound to this surface: 0 or 1.
    pub fn live_count(&self) -> usize {
        usize::from(self.slot.is_some())
    }

    /// Render `labels`/`values` as a line chart, replacing any prior
    /// instance. Length mismatches fail before the release step, leaving an
    /// existing instance untouched.
    pub fn render(
        &mut self,
        cfg: &ChartConfig,
        labels: &[String],
        values: &[f64],
    ) -> Result<&ChartInstance> {
        if labels.len() != values.len() {
            return Err(ChartError::LengthMismatch {
                labels: labels.len(),
                values: values.len(),
            }
            .into());
        }

        if let Some(old) = self.slot.take() {
            debug!(
                "releasing chart instance generation={} surface='{}'",
                old.generation(),
                self.surface.id
            );
            drop(old);
        }

        let generation = self.next_generation;
        let instance = render_line(&self.surface, cfg, labels, values, generation)
            .with_context(|| format!("rendering line chart on surface '{}'", self.surface.id))?;
        self.next_generation += 1;
        Ok(self.slot.insert(instance))
    }

    /// Drop the current instance without drawing a replacement.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}
