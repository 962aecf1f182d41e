// File: crates/trend-core/src/surface.rs
// Summary: Drawing surfaces and the registry that resolves well-known identifiers.

use std::collections::HashMap;

use crate::error::ChartError;
use crate::types::{HEIGHT, WIDTH};

/// Identifier of the one surface the hosting process is expected to expose.
pub const TEMP_CHART_SURFACE: &str = "tempChart";

/// A named drawing target with pixel dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self { id: id.into(), width: width.max(1), height: height.max(1) }
    }

    /// The default temperature-trend surface.
    pub fn well_known() -> Self {
        Self::new(TEMP_CHART_SURFACE, WIDTH, HEIGHT)
    }
}

/// Maps surface identifiers to surfaces, standing in for the hosting
/// document. Resolution failures propagate to the caller unhandled.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, Surface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface, returning any surface previously bound to the id.
    pub fn register(&mut self, surface: Surface) -> Option<Surface> {
        self.surfaces.insert(surface.id.clone(), surface)
    }

    pub fn resolve(&self, id: &str) -> Result<&Surface, ChartError> {
        self.surfaces
            .get(id)
            .ok_or_else(|| ChartError::SurfaceNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
