// File: crates/trend-core/src/error.rs
// Summary: Domain errors detected by this layer; everything else propagates via anyhow.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// The well-known surface identifier is not present in the registry.
    #[error("no drawing surface registered under id '{0}'")]
    SurfaceNotFound(String),

    /// Labels and values must stay parallel arrays.
    #[error("labels/values length mismatch: {labels} labels, {values} values")]
    LengthMismatch { labels: usize, values: usize },
}
