//! Configuration loading
//!
//! Reads a JSON chart description from disk, validates it, renders it into
//! a page, and returns the chart for further calls such as export. Fetch,
//! parse, and validation failures all propagate to the caller; a missing
//! container does not — the render logs it and the chart is still
//! returned.

use std::path::Path;

use ganttgrid_core::config::{ChartConfig, ConfigError};
use ganttgrid_core::markup::Page;
use thiserror::Error;

use crate::chart::GanttChart;

/// Chart loading error
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load config from {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: ConfigError,
    },
}

/// Load a chart configuration from `path` and render it into the container
/// registered under `container_id`.
pub fn load_chart(
    page: &mut Page,
    path: &Path,
    container_id: &str,
) -> Result<GanttChart, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Fetch {
        path: path.display().to_string(),
        source,
    })?;

    let chart = ChartConfig::from_json(&raw)
        .and_then(GanttChart::new)
        .map_err(|source| LoadError::Config {
            path: path.display().to_string(),
            source,
        })?;

    chart.render(page, container_id);
    Ok(chart)
}
