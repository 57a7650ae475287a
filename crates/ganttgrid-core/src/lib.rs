//! # ganttgrid-core
//!
//! Core domain model and traits for the ganttgrid chart renderer.
//!
//! This crate provides:
//! - Configuration types: `ChartConfig`, `Swimlane`, `TaskSpec`
//! - Configuration validation with descriptive errors
//! - The markup container model: `Element`, `Container`, `Page`
//! - The `Rasterizer` capability trait and error types
//!
//! ## Example
//!
//! ```rust
//! use ganttgrid_core::{ChartConfig, Swimlane, TaskSpec};
//!
//! let config = ChartConfig::new("Release Plan", 6)
//!     .swimlane(
//!         Swimlane::new("Backend")
//!             .task(TaskSpec::new("API design").span(1, 3).color("blue")),
//!     )
//!     .color("blue", "#00f");
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod markup;

pub use config::{ChartConfig, ConfigError, Swimlane, TaskSpec};
pub use markup::{Container, Element, Node, Page};

use thiserror::Error;

// ============================================================================
// Traits
// ============================================================================

/// Rasterization capability supplied by the host environment.
///
/// Turning rendered markup into encoded image bytes is delegated entirely to
/// the host; no backend ships with this workspace. Exporting without a
/// capability is a reported error, never a panic.
pub trait Rasterizer: Send + Sync {
    /// Rasterize serialized markup into encoded image bytes
    fn rasterize(&self, markup: &str) -> Result<Vec<u8>, RasterError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Rasterization backend error
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Rasterization failed: {0}")]
    Failed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Image export error
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Container '{0}' not found for export")]
    ContainerNotFound(String),

    #[error("Image export requires a rasterization backend, and none is available")]
    RasterizerUnavailable,

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error("Failed to write image file: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
