//! PNG export boundary
//!
//! Export delegates all rasterization work to a host-supplied
//! [`Rasterizer`]; this module only locates the container, checks that the
//! capability is present, and writes the resulting bytes to disk. Both
//! failure modes (missing container, missing capability) are logged and
//! reported without touching the filesystem.

use std::path::Path;

use ganttgrid_core::markup::Page;
use ganttgrid_core::{ExportError, Rasterizer};

/// Default filename for exported images
pub const DEFAULT_EXPORT_FILENAME: &str = "gantt-chart.png";

/// Image exporter with an optional host-supplied rasterization capability
#[derive(Default)]
pub struct Exporter {
    rasterizer: Option<Box<dyn Rasterizer>>,
}

impl Exporter {
    /// Exporter with no rasterization capability; every export reports the
    /// capability as unavailable.
    pub fn new() -> Self {
        Self { rasterizer: None }
    }

    /// Exporter delegating to the given rasterization backend
    pub fn with_rasterizer(rasterizer: Box<dyn Rasterizer>) -> Self {
        Self {
            rasterizer: Some(rasterizer),
        }
    }

    /// Whether a rasterization backend is available
    pub fn has_rasterizer(&self) -> bool {
        self.rasterizer.is_some()
    }

    /// Export the container registered under `container_id` as a PNG file.
    ///
    /// The returned result is the completion handle; failures are also
    /// logged. No retry is attempted — a failed export is terminal and the
    /// caller reissues the call if desired.
    pub fn export_as_png(
        &self,
        page: &Page,
        container_id: &str,
        filename: &Path,
    ) -> Result<(), ExportError> {
        let Some(container) = page.get(container_id) else {
            tracing::error!(container = container_id, "container not found for export");
            return Err(ExportError::ContainerNotFound(container_id.to_string()));
        };

        let Some(rasterizer) = self.rasterizer.as_deref() else {
            tracing::error!("no rasterization backend available, skipping export");
            return Err(ExportError::RasterizerUnavailable);
        };

        let image = rasterizer.rasterize(&container.to_string())?;
        std::fs::write(filename, image)?;
        Ok(())
    }
}
