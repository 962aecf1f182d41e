// File: crates/trend-core/src/instance.rs
// Summary: Live chart instance: dataset snapshot plus the rendered pixel buffer.

use std::fmt;

use anyhow::{Context, Result};

use crate::config::ChartConfig;

/// One rendered chart bound to a surface. Holds the dataset it was built
/// from and the RGB8 buffer the collaborator library drew into. Replaced
/// wholesale by the next render on the same surface.
pub struct ChartInstance {
    surface_id: String,
    config: ChartConfig,
    labels: Vec<String>,
    values: Vec<f64>,
    generation: u64,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl fmt::Debug for ChartInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Skip the pixel buffer.
        f.debug_struct("ChartInstance")
            .field("surface_id", &self.surface_id)
            .field("generation", &self.generation)
            .field("points", &self.values.len())
            .field("size", &(self.width, self.height))
            .finish_non_exhaustive()
    }
}

impl ChartInstance {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        surface_id: String,
        config: ChartConfig,
        labels: Vec<String>,
        values: Vec<f64>,
        generation: u64,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Self {
        Self { surface_id, config, labels, values, generation, width, height, pixels }
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn dataset_label(&self) -> &str {
        &self.config.dataset_label
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Replacement counter assigned by the owning controller; starts at 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB8 pixels, row-major, stride `width * 3`.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Encode the rendered buffer as PNG.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let img = image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            .context("pixel buffer does not match surface dimensions")?;
        let mut out = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(out)
    }

    /// Write the chart as a PNG file, creating parent directories.
    pub fn write_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
