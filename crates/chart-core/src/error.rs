// File: crates/chart-core/src/error.rs
// Summary: Error type for configuration checks and file output. Layout itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid color token '{0}' (expected #rrggbb or #rrggbbaa)")]
    InvalidColor(String),

    #[error("failed to write chart output: {0}")]
    Io(#[from] std::io::Error),
}
